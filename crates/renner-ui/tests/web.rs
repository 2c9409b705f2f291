//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]

use leptos::mount::mount_to;
use leptos::prelude::*;
use renner_core::Review;
use renner_ui::components::ReviewsSection;
use renner_ui::error::{href_or_fallback, link_href};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> web_sys::HtmlElement {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .unwrap()
}

#[wasm_bindgen_test]
fn reviews_section_renders_filter_bar() {
    let reviews = vec![
        Review::new(1, "Ana").with_rating(5).with_text("Ótimo"),
        Review::new(2, "Bruno").with_rating(4).with_text("Bom"),
    ];

    let _handle = mount_to(body(), move || {
        view! { <ReviewsSection reviews=reviews average="4.8".to_string() review_count=165 /> }
    });

    let document = web_sys::window().and_then(|w| w.document()).unwrap();
    let buttons = document.query_selector_all(".filter-button").unwrap();
    assert_eq!(buttons.length(), 6);

    let first = buttons
        .get(0)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .unwrap();
    assert_eq!(first.inner_text(), "Todas (2)");

    let cards = document.query_selector_all(".review-card").unwrap();
    assert_eq!(cards.length(), 2);
}

#[wasm_bindgen_test]
fn failed_link_is_reported_and_dropped() {
    let broken = || Err(renner_core::Error::invalid_link("relative URL without a base"));

    assert_eq!(link_href(broken()), None);
    assert_eq!(href_or_fallback(broken()), "#");
}
