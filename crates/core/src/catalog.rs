//! Compiled-in site content
//!
//! The business profile, menu and reviews live in `data/site.toml`, embedded
//! at build time and parsed once at startup. Loading validates identifier
//! uniqueness; malformed review ratings are tolerated and only logged.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{BusinessProfile, MenuItem, Review};
use crate::result::Result;
use crate::reviews::{RatingFilter, ReviewSummary};

const EMBEDDED_SITE: &str = include_str!("../data/site.toml");

/// Immutable site content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    business: BusinessProfile,
    #[serde(default)]
    menu: Vec<MenuItem>,
    #[serde(default)]
    reviews: Vec<Review>,
}

impl Catalog {
    /// Builds a catalog from parts, applying the same checks as loading.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateMenuItem` or `Error::DuplicateReview` when an
    /// identifier repeats.
    pub fn new(
        business: BusinessProfile,
        menu: Vec<MenuItem>,
        reviews: Vec<Review>,
    ) -> Result<Self> {
        let catalog = Self {
            business,
            menu,
            reviews,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads the content compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded file is malformed or repeats an id.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_SITE)
    }

    /// Parses and validates catalog TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::CatalogParseFailed` for invalid TOML or schema
    /// mismatches, and a duplicate-id error when an identifier repeats.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(source)?;
        catalog.validate()?;

        for review in catalog.reviews.iter().filter(|r| !r.has_valid_rating()) {
            tracing::warn!(
                review_id = %review.id,
                raw_rating = ?review.raw_rating(),
                "review has no valid rating; excluded from rating counts"
            );
        }

        tracing::debug!(
            menu_items = catalog.menu.len(),
            reviews = catalog.reviews.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if let Some(id) = self.menu.iter().map(|item| item.id).duplicates().next() {
            return Err(Error::DuplicateMenuItem { id: id.0 });
        }
        if let Some(id) = self.reviews.iter().map(|review| review.id).duplicates().next() {
            return Err(Error::DuplicateReview { id: id.0 });
        }
        Ok(())
    }

    pub const fn business(&self) -> &BusinessProfile {
        &self.business
    }

    /// Menu entries in display order
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Reviews in canonical display order
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Rating counts and the filtered review list for `filter`
    pub fn review_summary(&self, filter: RatingFilter) -> ReviewSummary<'_> {
        ReviewSummary::new(&self.reviews, filter)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.business().name, "Restaurante do Renner");
        assert_eq!(catalog.business().contact_handle.as_str(), "5531973144549");
        assert_eq!(catalog.business().opening_hours.len(), 3);
        assert_eq!(catalog.menu().len(), 4);
        assert_eq!(catalog.reviews().len(), 3);
    }

    #[test]
    fn test_new_rejects_duplicate_menu_ids() {
        let catalog = Catalog::embedded().unwrap();
        let mut menu = catalog.menu().to_vec();
        menu.extend(catalog.menu().first().cloned());

        let result = Catalog::new(catalog.business().clone(), menu, Vec::new());
        assert_eq!(result, Err(Error::DuplicateMenuItem { id: 1 }));
    }

    #[test]
    fn test_new_rejects_duplicate_review_ids() {
        let catalog = Catalog::embedded().unwrap();
        let reviews = vec![
            Review::new(8, "Ana").with_rating(5),
            Review::new(8, "Bia").with_rating(4),
        ];

        let result = Catalog::new(catalog.business().clone(), Vec::new(), reviews);
        assert_eq!(result, Err(Error::DuplicateReview { id: 8 }));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = Catalog::from_toml_str("[business\nname = 1");
        assert!(matches!(result, Err(Error::CatalogParseFailed { .. })));
    }
}
