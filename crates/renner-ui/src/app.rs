//! Root application component
//!
//! Loads the embedded catalog once and provides it to the routed pages.

use leptos::prelude::*;

use crate::components::LoadError;
use crate::error::report;
use crate::router::AppRouter;
use crate::state::load_catalog;

#[component]
pub fn App() -> impl IntoView {
    match load_catalog() {
        Ok(catalog) => {
            web_sys::console::log_1(
                &format!(
                    "Catalog loaded: {} menu items, {} reviews",
                    catalog.menu().len(),
                    catalog.reviews().len()
                )
                .into(),
            );
            provide_context(catalog);
            view! { <AppRouter /> }.into_any()
        }
        Err(err) => {
            report(&err);
            view! { <LoadError message=err.to_string() /> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        let _component = App;
    }
}
