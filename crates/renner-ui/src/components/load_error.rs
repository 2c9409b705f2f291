//! Error panel rendered when the catalog cannot be loaded

use leptos::prelude::*;

/// Shown instead of the page when the site content cannot be loaded
#[component]
pub fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="load-error">
            <h1>"Não foi possível carregar a página"</h1>
            <p>{message}</p>
        </div>
    }
}
