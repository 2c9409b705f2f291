//! Page components for each route

pub mod home;
pub mod not_found;

pub use home::{Home, Landing};
pub use not_found::NotFound;
