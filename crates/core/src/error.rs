//! Core error types for site operations using Railway-Oriented Programming.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for site operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Catalog errors
    #[error("failed to parse embedded catalog: {reason}")]
    CatalogParseFailed { reason: String },

    #[error("duplicate menu item id: {id}")]
    DuplicateMenuItem { id: u32 },

    #[error("duplicate review id: {id}")]
    DuplicateReview { id: u32 },

    // Domain value errors
    #[error("rating out of range 1..=5: {value}")]
    InvalidRating { value: i64 },

    #[error("contact handle has no digits: '{input}'")]
    InvalidContactHandle { input: String },

    #[error("failed to build link: {reason}")]
    InvalidLink { reason: String },
}

impl Error {
    /// Create a catalog parse error.
    pub fn catalog_parse_failed(reason: impl Into<String>) -> Self {
        Self::CatalogParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid contact handle error.
    pub fn invalid_contact_handle(input: impl Into<String>) -> Self {
        Self::InvalidContactHandle {
            input: input.into(),
        }
    }

    /// Create an invalid link error.
    pub fn invalid_link(reason: impl Into<String>) -> Self {
        Self::InvalidLink {
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::catalog_parse_failed(err.message())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::invalid_link(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::DuplicateMenuItem { id: 3 }.to_string(),
            "duplicate menu item id: 3"
        );
        assert_eq!(
            Error::InvalidRating { value: 0 }.to_string(),
            "rating out of range 1..=5: 0"
        );
        assert_eq!(
            Error::invalid_contact_handle("(--)").to_string(),
            "contact handle has no digits: '(--)'"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("name = ");
        let converted = parsed.map_err(Error::from);
        assert!(matches!(
            converted,
            Err(Error::CatalogParseFailed { .. })
        ));
    }
}
