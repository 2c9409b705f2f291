//! Result type definition and extension traits for Railway-Oriented Programming.
//!
//! Provides functional combinators for Result types, enabling clean error handling
//! without unwrap/expect/panic.

use crate::error::Error;

/// The standard Result type for site operations.
///
/// # Examples
///
/// ```
/// use renner_core::{Catalog, Result};
///
/// fn menu_size() -> Result<usize> {
///     let catalog = Catalog::embedded()?;
///     Ok(catalog.menu().len())
/// }
///
/// assert!(menu_size().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing safe combinators for Results.
///
/// This trait provides ergonomic methods that avoid the need for unwrap/expect.
pub trait ResultExt<T> {
    /// Inspect the error without consuming the Result.
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_inspect_error() {
        let result: Result<i32> = Err(Error::DuplicateReview { id: 1 });
        let mut seen = None;
        let _ = result.inspect_error(|e| seen = Some(e.clone()));
        assert_eq!(seen, Some(Error::DuplicateReview { id: 1 }));
    }

    #[test]
    fn test_result_inspect_error_skips_ok() {
        let result: Result<i32> = Ok(1);
        let mut called = false;
        let _ = result.inspect_error(|_| called = true);
        assert!(!called);
    }
}
