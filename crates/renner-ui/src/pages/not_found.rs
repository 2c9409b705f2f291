use leptos::prelude::*;

use crate::router::routes;

/// Fallback for any path other than the landing page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404 - Página não encontrada"</h1>
            <p>"A página que você procura não existe."</p>
            <a href=routes::HOME>"Voltar ao início"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_component_exists() {
        let _component = NotFound;
    }
}
