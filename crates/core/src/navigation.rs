//! Page sections and scroll arithmetic

use std::fmt;

/// Height reserved for the fixed header when scrolling to an anchor
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// Scroll depth past which the header switches to its solid style
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Anchored sections reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Menu,
    Reviews,
    Contact,
}

impl Section {
    /// Navigation order
    pub const ALL: [Self; 4] = [Self::About, Self::Menu, Self::Reviews, Self::Contact];

    /// Element id of the section
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => "sobre",
            Self::Menu => "menu",
            Self::Reviews => "avaliacoes",
            Self::Contact => "contato",
        }
    }

    /// Fragment link, used as the `href` fallback when scripting is off
    pub const fn href(self) -> &'static str {
        match self {
            Self::About => "#sobre",
            Self::Menu => "#menu",
            Self::Reviews => "#avaliacoes",
            Self::Contact => "#contato",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "Sobre",
            Self::Menu => "Cardápio",
            Self::Reviews => "Avaliações",
            Self::Contact => "Contato",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Document-relative scroll position that lands `element_top` (viewport
/// coordinates) just below the fixed header.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET_PX
}

/// Whether the page has scrolled past the header threshold (strictly)
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}
