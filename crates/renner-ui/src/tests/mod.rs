//! Behavioral tests for UI state and view helpers
//!
//! BDD-style given-when-then names; nothing here touches the DOM.

pub mod navigation_behaviors;
