//! Business profile model

use serde::{Deserialize, Serialize};

use crate::contact::ContactHandle;

/// One row of the opening hours table ("Sábado" / "11:00 - 15:00")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub label: String,
    pub time: String,
}

/// Restaurant profile shown across the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub address: String,
    pub full_address: String,
    pub phone: String,
    /// Digits-only number used to build contact links
    pub contact_handle: ContactHandle,
    /// Short hours line used in the hero and about sections
    pub hours: String,
    /// Aggregate rating from the external review platform
    pub rating: f64,
    pub review_count: u32,
    pub price_range: String,
    /// Embedded verbatim, never validated
    pub map_link: String,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,
    #[serde(default)]
    pub holiday_note: String,
}

impl BusinessProfile {
    /// Rating rounded to one decimal place, e.g. "4.8"
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}
