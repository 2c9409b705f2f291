//! Core types and pure logic for the Restaurante do Renner site
//!
//! Everything here is synchronous and free of browser dependencies, so it
//! builds and tests natively; the `renner-ui` crate binds it to the DOM.
//!
//! ## Module Structure
//! - `catalog`: compiled-in business profile, menu and reviews
//! - `models`: domain types (`BusinessProfile`, `MenuItem`, `Review`, `Rating`)
//! - `reviews`: rating tally, rating filter and filter bar model
//! - `contact`: messaging deep links
//! - `navigation`: section anchors and scroll arithmetic
//! - `error` / `result`: error type and Railway-style combinators

#![forbid(unsafe_code)]

pub mod catalog;
pub mod contact;
pub mod error;
pub mod models;
pub mod navigation;
pub mod result;
pub mod reviews;

pub use catalog::Catalog;
pub use contact::{ContactHandle, item_order_link, order_link};
pub use error::Error;
pub use models::{
    BusinessProfile, DETAILS_FALLBACK, MenuCategory, MenuItem, MenuItemId, OpeningHours, Rating,
    Review, ReviewId,
};
pub use navigation::Section;
pub use result::{Result, ResultExt};
pub use reviews::{FilterOption, RatingCounts, RatingFilter, ReviewSummary, filter_options};
