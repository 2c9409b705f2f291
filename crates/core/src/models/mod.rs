//! Data models for the restaurant page

pub mod business;
pub mod menu;
pub mod review;

pub use business::{BusinessProfile, OpeningHours};
pub use menu::{DETAILS_FALLBACK, MenuCategory, MenuItem, MenuItemId};
pub use review::{Rating, Review, ReviewId};
