//! Fixed navigation bar with desktop links and a mobile overlay menu

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use renner_core::Section;

use crate::state::PageState;

/// Header class for the current scroll state
pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "navbar navbar-solid"
    } else {
        "navbar navbar-transparent"
    }
}

/// In-page link that scrolls smoothly instead of jumping to the anchor
#[component]
pub fn SectionLink(
    section: Section,
    page: PageState,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        page.navigate(section);
    };

    view! {
        <a href=section.href() class=class on:click=on_click>
            {section.label()}
        </a>
    }
}

#[component]
pub fn NavBar(page: PageState, brand: String, order_href: String) -> impl IntoView {
    let desktop_links = Section::ALL
        .iter()
        .map(|&section| view! { <SectionLink section=section page=page class="nav-link" /> })
        .collect::<Vec<_>>();

    let mobile_links = move || {
        Section::ALL
            .iter()
            .map(|&section| {
                view! { <SectionLink section=section page=page class="mobile-nav-link" /> }
            })
            .collect::<Vec<_>>()
    };

    let mobile_order_href = order_href.clone();

    view! {
        <nav class=move || header_class(page.scrolled.get())>
            <div class="navbar-inner">
                <span class="brand">{brand}</span>
                <div class="nav-links">
                    {desktop_links}
                    <a href=order_href class="nav-order" target="_blank" rel="noopener noreferrer">
                        "Fazer Pedido"
                    </a>
                </div>
                <button
                    class="menu-toggle"
                    aria-label="Menu"
                    aria-expanded=move || page.menu_open.get().to_string()
                    on:click=move |_| page.toggle_menu()
                >
                    {move || if page.menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || page.menu_open.get()>
                <div class="mobile-menu">
                    {mobile_links()}
                    <a
                        href=mobile_order_href.clone()
                        class="mobile-order"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Pedir pelo WhatsApp"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
