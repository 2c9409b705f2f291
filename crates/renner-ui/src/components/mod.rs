//! Page sections and the small pieces they share

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod load_error;
pub mod menu;
pub mod navbar;
pub mod reviews;
pub mod services;
pub mod stars;

pub use about::About;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use load_error::LoadError;
pub use menu::{MenuItemCard, MenuSection};
pub use navbar::{NavBar, SectionLink};
pub use reviews::{FilterBar, NoReviews, ReviewCard, ReviewsSection};
pub use services::Services;
pub use stars::Stars;
