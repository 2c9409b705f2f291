//! Full-height hero with the primary order button

use leptos::prelude::*;
use renner_core::{BusinessProfile, Section};

use crate::components::Stars;
use crate::state::PageState;

#[component]
pub fn Hero(page: PageState, business: BusinessProfile, order_href: String) -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero-content">
                <div class="hero-badge">
                    <Stars count=5 />
                    <span>"O mais bem avaliado de Betim"</span>
                </div>
                <h1>"Sabor Caseiro " <span class="highlight">"Inesquecível"</span></h1>
                <p class="hero-lead">
                    "Comida de verdade, feita com amor e ingredientes selecionados. "
                    "O almoço perfeito para o seu dia."
                </p>
                <div class="hero-actions">
                    <a
                        href=order_href
                        class="btn-primary"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Pedir Agora"
                    </a>
                    <button class="btn-secondary" on:click=move |_| page.navigate(Section::Contact)>
                        "Como Chegar"
                    </button>
                </div>
                <div class="hero-pills">
                    <span class="pill">{business.hours}</span>
                    <span class="pill">{format!("{} por pessoa", business.price_range)}</span>
                </div>
            </div>
            <button
                class="scroll-indicator"
                aria-label="Rolar para Sobre"
                on:click=move |_| page.navigate(Section::About)
            >
                "⌄"
            </button>
        </header>
    }
}
