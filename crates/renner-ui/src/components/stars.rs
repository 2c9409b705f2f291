//! Star row used by the hero badge, review headers and review cards

use leptos::prelude::*;

/// Renders `count` filled stars
#[component]
pub fn Stars(count: usize, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("stars {class}") aria-label=format!("{count} estrelas")>
            {(0..count).map(|_| view! { <span class="star">"★"</span> }).collect::<Vec<_>>()}
        </span>
    }
}
