//! Page footer

use leptos::prelude::*;

/// Current year from the browser clock
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn copyright_line(year: u32, name: &str) -> String {
    format!("© {year} {name}. Todos os direitos reservados.")
}

#[component]
pub fn Footer(name: String, map_link: String) -> impl IntoView {
    let copyright = copyright_line(current_year(), &name);

    view! {
        <footer class="footer">
            <span class="brand">{name}</span>
            <p>{copyright}</p>
            <div class="footer-links">
                <a href="#">"Privacidade"</a>
                <a href="#">"Termos"</a>
                <a href=map_link>"Localização"</a>
            </div>
        </footer>
    }
}
