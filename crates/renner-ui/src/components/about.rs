//! "Sobre" section

use leptos::prelude::*;
use renner_core::{BusinessProfile, Section};

#[component]
pub fn About(business: BusinessProfile) -> impl IntoView {
    let rating = business.rating_label();

    view! {
        <section id=Section::About.anchor() class="about">
            <div class="about-rating">
                <span class="about-score">{rating}</span>
                <span class="about-score-label">"Nota Google"</span>
            </div>
            <div class="about-text">
                <h2 class="eyebrow">"Sobre Nós"</h2>
                <h3>"Tradição e Qualidade em Betim"</h3>
                <p>
                    "Localizado no bairro Dom Bosco, o " <strong>{business.name}</strong>
                    " é referência quando o assunto é comida caseira de qualidade. "
                    "Servimos refeições preparadas no dia, "
                    "com aquele tempero que lembra comida de mãe."
                </p>
                <p>
                    "Seja para um almoço rápido no meio do expediente ou uma refeição tranquila, "
                    "nosso compromisso é oferecer sabor, higiene e um preço justo "
                    "que cabe no seu bolso."
                </p>
                <div class="about-facts">
                    <div class="fact">
                        <p class="fact-label">"Horário"</p>
                        <p class="fact-value">{business.hours}</p>
                    </div>
                    <div class="fact">
                        <p class="fact-label">"Localização"</p>
                        <p class="fact-value">"Dom Bosco, Betim"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
