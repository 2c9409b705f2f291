//! "Contato" section: address, opening hours, phone and map link

use leptos::prelude::*;
use renner_core::{BusinessProfile, Section};

#[component]
pub fn ContactSection(business: BusinessProfile, order_href: String) -> impl IntoView {
    let map_link = business.map_link.clone();

    view! {
        <section id=Section::Contact.anchor() class="contact">
            <div class="contact-info">
                <h2>"Visite-nos hoje mesmo"</h2>
                <p class="contact-lead">
                    "Estamos prontos para te atender com o melhor sabor da região. "
                    "Peça delivery ou venha comer aqui."
                </p>
                <div class="contact-block">
                    <h3>"Endereço"</h3>
                    <p>{business.full_address}</p>
                    <a href=business.map_link target="_blank" rel="noopener noreferrer">
                        "Ver no Google Maps"
                    </a>
                </div>
                <div class="contact-block">
                    <h3>"Horário de Funcionamento"</h3>
                    <ul class="opening-hours">
                        {business
                            .opening_hours
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <li>
                                        <span>{row.label}</span>
                                        <span>{row.time}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <p class="holiday-note">{business.holiday_note}</p>
                </div>
                <div class="contact-block">
                    <h3>"Contato"</h3>
                    <p>{business.phone}</p>
                    <a href=order_href>"Chamar no WhatsApp"</a>
                </div>
            </div>
            <div class="contact-map">
                <a href=map_link class="btn-primary" target="_blank" rel="noopener noreferrer">
                    "Abrir no Google Maps"
                </a>
            </div>
        </section>
    }
}
