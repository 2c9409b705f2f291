//! Service highlights strip

use leptos::prelude::*;

/// Title and blurb for each way of being served
pub const SERVICES: [(&str, &str); 3] = [
    (
        "Refeição no Local",
        "Ambiente limpo, ventilado e acolhedor para você almoçar com tranquilidade.",
    ),
    (
        "Retirada no Balcão",
        "Faça seu pedido e passe para buscar. Rápido e prático para seu dia a dia.",
    ),
    (
        "Entrega sem Contato",
        "Levamos o melhor da nossa cozinha até você com total segurança.",
    ),
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="services">
            {SERVICES
                .iter()
                .map(|(title, blurb)| {
                    view! {
                        <div class="service-card">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
