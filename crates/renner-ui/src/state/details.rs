//! Per-item "details expanded" flags for the menu grid
//!
//! Kept apart from [`MenuItem`](renner_core::MenuItem): the catalog entry is
//! immutable domain data, whether its panel is open is view state.

use im::HashMap;
use renner_core::MenuItemId;

/// Mapping from menu item to whether its details panel is open.
///
/// Backed by a persistent map so signal updates clone cheaply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedDetails {
    open: HashMap<MenuItemId, bool>,
}

impl ExpandedDetails {
    /// Unknown items are collapsed
    pub fn is_expanded(&self, id: MenuItemId) -> bool {
        self.open.get(&id).copied().unwrap_or(false)
    }

    fn set(&mut self, id: MenuItemId, expanded: bool) {
        self.open.insert(id, expanded);
    }

    pub fn toggle(&mut self, id: MenuItemId) {
        let next = !self.is_expanded(id);
        self.set(id, next);
    }
}
