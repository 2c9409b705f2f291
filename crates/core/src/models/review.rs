//! Customer review model

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// Unique review identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub u32);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating, always within `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Every rating, highest first (the order the filter bar shows them)
    pub const DESCENDING: [Self; 5] = [Self(5), Self(4), Self(3), Self(2), Self(1)];

    /// Builds a rating, returning `None` outside `1..=5`
    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Number of filled stars drawn for this rating
    pub const fn stars(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(Error::InvalidRating { value })
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        Self::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single customer review.
///
/// The rating is kept as it appeared in the source data: it may be missing,
/// non-numeric or out of range. [`Review::rating`] only yields valid values,
/// so malformed reviews still display but never count towards a rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    #[serde(
        rename = "rating",
        default,
        deserialize_with = "lenient_rating",
        skip_serializing_if = "Option::is_none"
    )]
    raw_rating: Option<i64>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub time_ago: String,
    #[serde(default)]
    pub highlight: bool,
}

impl Review {
    /// Creates a review with no rating and empty text
    pub fn new(id: u32, author: impl Into<String>) -> Self {
        Self {
            id: ReviewId(id),
            author: author.into(),
            raw_rating: None,
            text: String::new(),
            time_ago: String::new(),
            highlight: false,
        }
    }

    /// Builder pattern: set the raw rating (not validated here)
    pub fn with_rating(mut self, rating: i64) -> Self {
        self.raw_rating = Some(rating);
        self
    }

    /// Builder pattern: set the review body
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder pattern: set the relative time label
    pub fn with_time_ago(mut self, time_ago: impl Into<String>) -> Self {
        self.time_ago = time_ago.into();
        self
    }

    /// Builder pattern: mark as highlighted
    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    /// The validated rating, or `None` when missing or malformed
    pub fn rating(&self) -> Option<Rating> {
        self.raw_rating.and_then(Rating::new)
    }

    /// The rating exactly as loaded
    pub const fn raw_rating(&self) -> Option<i64> {
        self.raw_rating
    }

    pub fn has_valid_rating(&self) -> bool {
        self.rating().is_some()
    }

    /// First character of the author name, used for the avatar
    pub fn initial(&self) -> Option<char> {
        self.author.trim_start().chars().next()
    }
}

/// Accepts anything in the `rating` slot; only whole numbers survive.
#[allow(clippy::cast_possible_truncation)]
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[allow(dead_code)]
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRating {
        Integer(i64),
        Float(f64),
        Other(serde::de::IgnoredAny),
    }

    let raw = Option::<RawRating>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawRating::Integer(value)) => Some(value),
        Some(RawRating::Float(value)) if value.is_finite() && value.fract() == 0.0 => {
            Some(value as i64)
        }
        Some(RawRating::Float(_) | RawRating::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(1).map(Rating::value), Some(1));
        assert_eq!(Rating::new(5).map(Rating::value), Some(5));
        assert_eq!(Rating::new(0), None);
        assert_eq!(Rating::new(6), None);
        assert_eq!(Rating::new(-3), None);
        assert_eq!(Rating::new(i64::MAX), None);
    }

    #[test]
    fn test_rating_try_from_error() {
        assert_eq!(Rating::try_from(7), Err(Error::InvalidRating { value: 7 }));
        assert_eq!(Rating::try_from(3).map(Rating::stars), Ok(3));
    }

    #[test]
    fn test_rating_descending_order() {
        let values: Vec<u8> = Rating::DESCENDING.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_review_builder() {
        let review = Review::new(7, "Maria Oliveira")
            .with_rating(5)
            .with_text("Comida caseira de verdade")
            .with_time_ago("1 mês atrás")
            .highlighted();

        assert_eq!(review.id, ReviewId(7));
        assert_eq!(review.rating(), Rating::new(5));
        assert_eq!(review.time_ago, "1 mês atrás");
        assert!(review.highlight);
    }

    #[test]
    fn test_review_out_of_range_rating_is_kept_raw() {
        let review = Review::new(1, "Ana").with_rating(0);
        assert_eq!(review.raw_rating(), Some(0));
        assert_eq!(review.rating(), None);
        assert!(!review.has_valid_rating());
    }

    #[test]
    fn test_review_initial() {
        assert_eq!(Review::new(1, "César Mio").initial(), Some('C'));
        assert_eq!(Review::new(2, "  Élida").initial(), Some('É'));
        assert_eq!(Review::new(3, "").initial(), None);
    }

    #[test]
    fn test_lenient_rating_deserialization() {
        let cases = [
            (r#"{"id":1,"author":"a","rating":4}"#, Some(4)),
            (r#"{"id":1,"author":"a","rating":4.0}"#, Some(4)),
            (r#"{"id":1,"author":"a","rating":4.5}"#, None),
            (r#"{"id":1,"author":"a","rating":"cinco"}"#, None),
            (r#"{"id":1,"author":"a","rating":null}"#, None),
            (r#"{"id":1,"author":"a"}"#, None),
        ];

        for (json, expected) in cases {
            let review: Review = serde_json::from_str(json).unwrap();
            assert_eq!(review.raw_rating(), expected, "input: {json}");
        }
    }

    #[test]
    fn test_review_serialization_uses_rating_key() -> Result<(), Box<dyn std::error::Error>> {
        let review = Review::new(3, "Renato").with_rating(5);
        let json = serde_json::to_string(&review)?;
        assert!(json.contains(r#""rating":5"#));

        let unrated = serde_json::to_string(&Review::new(4, "Sem nota"))?;
        assert!(!unrated.contains("rating"));
        Ok(())
    }
}
