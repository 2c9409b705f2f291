//! Leptos 0.7 CSR site for Restaurante do Renner
//!
//! ## Architecture
//! - Pure client-side rendering, compiled to `wasm32-unknown-unknown`
//! - Site content comes from [`renner_core::Catalog`], embedded at build time
//! - Single landing route; unknown paths render a not-found page
//!
//! ## Module Structure
//! - `app`: root component, provides the catalog
//! - `router`: route definitions
//! - `pages`: landing and not-found pages
//! - `components`: page sections
//! - `state`: header/menu signals, expanded details, scroll handling
//! - `error`: UI error type and console reporting

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;

pub use app::App;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod module_tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let _app = App;
        let _details = state::ExpandedDetails::default();
        assert_eq!(router::routes::HOME, "/");
    }

    #[test]
    fn test_error_types() {
        let err = error::UiError::ElementNotFound("menu".to_string());
        assert!(err.to_string().contains("Element not found"));
    }
}
