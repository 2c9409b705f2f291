//! Application state management
//!
//! State is split into narrow objects handed to the views that need them:
//! - [`PageState`]: header style and mobile menu, shared by the navigation
//!   bar and the hero
//! - [`ExpandedDetails`]: owned by the menu section
//! - the review [`RatingFilter`](renner_core::RatingFilter) signal: owned by
//!   the reviews section
//!
//! The catalog itself is loaded once and provided through context.

pub mod details;
pub mod scroll;

use std::sync::Arc;

use leptos::prelude::*;
use renner_core::navigation::is_scrolled;
use renner_core::{Catalog, Section};

use crate::error::{Result, UiError, report};

pub use details::ExpandedDetails;
pub use scroll::{scroll_to_section, track_scroll};

/// Header and mobile menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Mobile menu overlay visible
    pub menu_open: RwSignal<bool>,
    /// Page scrolled past the header threshold
    pub scrolled: RwSignal<bool>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            scrolled: RwSignal::new(false),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }

    /// Only notifies subscribers when the threshold is crossed
    pub fn set_scroll_y(&self, scroll_y: f64) {
        let scrolled = is_scrolled(scroll_y);
        if self.scrolled.get_untracked() != scrolled {
            self.scrolled.set(scrolled);
        }
    }

    /// Closes the mobile menu and scrolls to `section`
    pub fn navigate(&self, section: Section) {
        self.close_menu();
        if let Err(err) = scroll_to_section(section) {
            report(&err);
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads the compiled-in catalog
///
/// # Errors
///
/// Returns `UiError::CatalogUnavailable` if the embedded data is invalid.
pub fn load_catalog() -> Result<Arc<Catalog>> {
    Catalog::embedded().map(Arc::new).map_err(UiError::from)
}

/// Catalog provided by [`App`](crate::App)
///
/// # Errors
///
/// Returns `UiError::CatalogUnavailable` when called outside the app tree.
pub fn use_catalog() -> Result<Arc<Catalog>> {
    use_context::<Arc<Catalog>>()
        .ok_or_else(|| UiError::CatalogUnavailable("not provided".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_state_starts_closed_and_unscrolled() {
        let page = PageState::new();
        assert!(!page.menu_open.get_untracked());
        assert!(!page.scrolled.get_untracked());
    }

    #[test]
    fn test_load_catalog() {
        let catalog = load_catalog();
        assert!(catalog.is_ok());
        assert_eq!(catalog.map(|c| c.menu().len()).ok(), Some(4));
    }

    #[test]
    fn test_use_catalog_without_context() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(matches!(
                use_catalog(),
                Err(UiError::CatalogUnavailable(_))
            ));
        });
    }
}
