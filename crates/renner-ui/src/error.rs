//! Error types for Leptos UI components
//!
//! DOM failures are never fatal: they are reported to the browser console
//! and the page keeps working.

use renner_core::ResultExt;
use thiserror::Error;
use url::Url;

/// Errors that can occur in UI components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Site content could not be loaded or is missing from context
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),
    /// No element carries the requested anchor id
    #[error("Element not found: #{0}")]
    ElementNotFound(String),
    /// Not running in a browser window
    #[error("Browser window unavailable")]
    WindowUnavailable,
    /// Reading or changing the scroll position failed
    #[error("Scroll failed: {0}")]
    ScrollFailed(String),
}

impl From<renner_core::Error> for UiError {
    fn from(err: renner_core::Error) -> Self {
        Self::CatalogUnavailable(err.to_string())
    }
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

/// Logs an error to the browser console
pub fn report(err: &UiError) {
    web_sys::console::error_1(&err.to_string().into());
}

fn log_link_error(err: &renner_core::Error) {
    web_sys::console::error_1(&format!("Failed to build link: {err}").into());
}

/// Renders a link result as an `href`; failures go to the console
pub fn link_href(link: renner_core::Result<Url>) -> Option<String> {
    link.inspect_error(log_link_error).ok().map(String::from)
}

/// Like [`link_href`], falling back to `"#"` on failure
pub fn href_or_fallback(link: renner_core::Result<Url>) -> String {
    link_href(link).unwrap_or_else(|| String::from("#"))
}
