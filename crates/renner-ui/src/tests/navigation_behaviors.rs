//! Behavioral tests for header state and in-page navigation

use leptos::prelude::*;
use renner_core::Section;

use crate::components::navbar::header_class;
use crate::router::routes;
use crate::state::PageState;

#[test]
fn given_route_constants_when_checking_home_then_is_root() {
    assert_eq!(routes::HOME, "/");
}

#[test]
fn given_closed_menu_when_toggled_twice_then_closed_again() {
    // Given
    let page = PageState::new();

    // When
    page.toggle_menu();
    let opened = page.menu_open.get_untracked();
    page.toggle_menu();

    // Then
    assert!(opened);
    assert!(!page.menu_open.get_untracked());
}

#[test]
fn given_open_menu_when_closed_then_not_visible() {
    // Given
    let page = PageState::new();
    page.toggle_menu();

    // When
    page.close_menu();

    // Then
    assert!(!page.menu_open.get_untracked());
}

#[test]
fn given_scroll_at_threshold_when_updating_then_header_stays_transparent() {
    // Given
    let page = PageState::new();

    // When
    page.set_scroll_y(50.0);

    // Then
    assert!(!page.scrolled.get_untracked(), "Threshold is exclusive");
    assert_eq!(header_class(page.scrolled.get_untracked()), "navbar navbar-transparent");
}

#[test]
fn given_scroll_past_threshold_when_updating_then_header_solid() {
    // Given
    let page = PageState::new();

    // When
    page.set_scroll_y(51.0);

    // Then
    assert!(page.scrolled.get_untracked());
    assert_eq!(header_class(true), "navbar navbar-solid");
}

#[test]
fn given_scrolled_page_when_back_to_top_then_transparent_again() {
    // Given
    let page = PageState::new();
    page.set_scroll_y(400.0);

    // When
    page.set_scroll_y(0.0);

    // Then
    assert!(!page.scrolled.get_untracked());
}

#[test]
fn given_sections_when_listing_links_then_anchors_in_page_order() {
    let hrefs: Vec<&str> = Section::ALL.iter().map(|section| section.href()).collect();
    assert_eq!(hrefs, vec!["#sobre", "#menu", "#avaliacoes", "#contato"]);
}
