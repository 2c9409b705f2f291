//! Review aggregation and rating filter
//!
//! Pure, single-pass derivations over the review list:
//! - [`RatingCounts`] tallies how many reviews carry each valid rating.
//! - [`RatingFilter`] selects either every review or those with one rating,
//!   preserving source order.
//! - [`filter_options`] builds the filter bar model ("Todas", 5 … 1).
//!
//! Reviews with a missing or malformed rating are skipped by the tally but
//! still shown when no rating is selected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Rating, Review};

/// Current rating selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RatingFilter {
    #[default]
    All,
    Only(Rating),
}

impl RatingFilter {
    pub const fn selected(self) -> Option<Rating> {
        match self {
            Self::All => None,
            Self::Only(rating) => Some(rating),
        }
    }

    pub fn matches(self, review: &Review) -> bool {
        match self {
            Self::All => true,
            Self::Only(rating) => review.rating() == Some(rating),
        }
    }

    /// Stable filter: original relative order is kept, nothing is deduplicated
    pub fn apply(self, reviews: &[Review]) -> Vec<&Review> {
        reviews.iter().filter(|review| self.matches(review)).collect()
    }
}

impl From<Option<Rating>> for RatingFilter {
    fn from(selection: Option<Rating>) -> Self {
        selection.map_or(Self::All, Self::Only)
    }
}

/// Number of reviews per valid rating; ratings with no reviews are absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingCounts {
    counts: BTreeMap<Rating, usize>,
}

impl RatingCounts {
    /// Counts reviews in one pass, skipping any without a valid rating
    pub fn tally<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        let counts = reviews
            .into_iter()
            .filter_map(Review::rating)
            .fold(BTreeMap::new(), |mut acc, rating| {
                let slot = acc.entry(rating).or_insert(0_usize);
                *slot = slot.saturating_add(1);
                acc
            });
        Self { counts }
    }

    /// Count for one rating, zero when no review carries it
    pub fn get(&self, rating: Rating) -> usize {
        self.counts.get(&rating).copied().unwrap_or(0)
    }

    /// Sum across all ratings, i.e. the number of validly rated reviews
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Present ratings in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (Rating, usize)> + '_ {
        self.counts.iter().map(|(rating, count)| (*rating, *count))
    }
}

/// One button of the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: RatingFilter,
    pub count: usize,
    /// Zero-count ratings are shown but cannot be chosen
    pub enabled: bool,
}

impl FilterOption {
    pub fn is_selected(&self, current: RatingFilter) -> bool {
        self.filter == current
    }
}

/// Filter bar model: "all" first, then ratings 5 down to 1.
///
/// `total` is the full review count shown next to "Todas", which includes
/// reviews whose rating is malformed.
pub fn filter_options(counts: &RatingCounts, total: usize) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        filter: RatingFilter::All,
        count: total,
        enabled: true,
    })
    .chain(Rating::DESCENDING.iter().map(|&rating| {
        let count = counts.get(rating);
        FilterOption {
            filter: RatingFilter::Only(rating),
            count,
            enabled: count > 0,
        }
    }))
    .collect()
}

/// Counts plus the filtered view, computed together for one render
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary<'a> {
    pub counts: RatingCounts,
    pub filter: RatingFilter,
    pub reviews: Vec<&'a Review>,
    total: usize,
}

impl<'a> ReviewSummary<'a> {
    pub fn new(reviews: &'a [Review], filter: RatingFilter) -> Self {
        Self {
            counts: RatingCounts::tally(reviews),
            filter,
            reviews: filter.apply(reviews),
            total: reviews.len(),
        }
    }

    /// True when the selection matched nothing; callers show a fallback
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub const fn total(&self) -> usize {
        self.total
    }

    pub fn options(&self) -> Vec<FilterOption> {
        filter_options(&self.counts, self.total)
    }
}
