//! Menu catalog model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shown when a menu item carries no long-form details
pub const DETAILS_FALLBACK: &str = "Consulte o restaurante para mais detalhes.";

/// Unique menu item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Menu category, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    #[serde(rename = "Prato Feito")]
    SetMeal,
    #[serde(rename = "Saladas")]
    Salads,
    #[serde(rename = "Bebidas")]
    Beverages,
    #[serde(rename = "Porções")]
    Portions,
}

impl MenuCategory {
    pub const ALL: [Self; 4] = [Self::SetMeal, Self::Salads, Self::Beverages, Self::Portions];

    /// Badge text shown on the menu card
    pub const fn label(self) -> &'static str {
        match self {
            Self::SetMeal => "Prato Feito",
            Self::Salads => "Saladas",
            Self::Beverages => "Bebidas",
            Self::Portions => "Porções",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry.
///
/// `price` is display text ("A partir de R$ 15,00") and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    pub category: MenuCategory,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl MenuItem {
    pub fn new(id: u32, name: impl Into<String>, category: MenuCategory) -> Self {
        Self {
            id: MenuItemId(id),
            name: name.into(),
            description: String::new(),
            price: String::new(),
            category,
            image: String::new(),
            details: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Details text, falling back to [`DETAILS_FALLBACK`] when absent or blank
    pub fn details_or_default(&self) -> &str {
        self.details
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DETAILS_FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_menu_item_builder() {
        let item = MenuItem::new(2, "Feijão Tropeiro", MenuCategory::SetMeal)
            .with_description("Tropeiro completo mineiro")
            .with_price("R$ 18,00")
            .with_details("Feijão tropeiro tradicional");

        assert_eq!(item.id, MenuItemId(2));
        assert_eq!(item.price, "R$ 18,00");
        assert_eq!(item.details_or_default(), "Feijão tropeiro tradicional");
    }

    #[test]
    fn test_details_fallback() {
        let bare = MenuItem::new(9, "Suco", MenuCategory::Beverages);
        assert_eq!(bare.details_or_default(), DETAILS_FALLBACK);

        let blank = MenuItem::new(10, "Água", MenuCategory::Beverages).with_details("   ");
        assert_eq!(blank.details_or_default(), DETAILS_FALLBACK);
    }

    #[test]
    fn test_category_labels_match_serialized_names() -> Result<(), serde_json::Error> {
        for category in MenuCategory::ALL {
            let json = serde_json::to_string(&category)?;
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
        Ok(())
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let parsed: Result<MenuCategory, _> = serde_json::from_str("\"Sobremesas\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_menu_item_deserializes_without_details() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":4,"name":"Salada Completa","category":"Saladas","price":"R$ 12,00"}"#,
        )
        .unwrap();
        assert_eq!(item.category, MenuCategory::Salads);
        assert_eq!(item.details, None);
    }
}
