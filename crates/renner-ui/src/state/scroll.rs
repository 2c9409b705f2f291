//! Window scroll tracking and smooth scrolling to sections
//!
//! The scroll listener is registered when the landing page mounts and
//! removed when its reactive owner is cleaned up.

use leptos::ev;
use leptos::prelude::*;
use renner_core::Section;
use renner_core::navigation::scroll_target;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::error::{Result, UiError, report};
use crate::state::PageState;

/// Current vertical scroll position of the window
///
/// # Errors
///
/// Returns an error if:
/// - No window object is available (not in browser context)
/// - The browser refuses to report the scroll position
fn current_scroll_y() -> Result<f64> {
    web_sys::window()
        .ok_or(UiError::WindowUnavailable)?
        .scroll_y()
        .map_err(|e| UiError::ScrollFailed(format!("{e:?}")))
}

/// Keeps `page.scrolled` in sync with the window scroll position.
///
/// Must be called inside a component; the listener lives as long as the
/// calling component's owner.
pub fn track_scroll(page: PageState) {
    match current_scroll_y() {
        Ok(y) => page.set_scroll_y(y),
        Err(err) => report(&err),
    }

    let handle = window_event_listener(ev::scroll, move |_| match current_scroll_y() {
        Ok(y) => page.set_scroll_y(y),
        Err(err) => report(&err),
    });
    on_cleanup(move || handle.remove());
}

/// Smooth-scrolls so `section` lands just below the fixed header
///
/// # Errors
///
/// Returns an error if:
/// - No window or document is available
/// - No element carries the section's anchor id
/// - The current page offset cannot be read
pub fn scroll_to_section(section: Section) -> Result<()> {
    let window = web_sys::window().ok_or(UiError::WindowUnavailable)?;
    let document = window.document().ok_or(UiError::WindowUnavailable)?;
    let element = document
        .get_element_by_id(section.anchor())
        .ok_or_else(|| UiError::ElementNotFound(section.anchor().to_string()))?;

    let element_top = element.get_bounding_client_rect().top();
    let page_offset = window
        .page_y_offset()
        .map_err(|e| UiError::ScrollFailed(format!("{e:?}")))?;

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(element_top, page_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    Ok(())
}
