//! Reviews section with the rating filter bar

use std::sync::Arc;

use leptos::prelude::*;
use renner_core::{
    FilterOption, RatingCounts, RatingFilter, Review, ReviewSummary, Section, filter_options,
};

use crate::components::Stars;

/// Button text: "Todas (N)" or "{rating} ★ (n)"
pub fn option_label(option: &FilterOption) -> String {
    match option.filter {
        RatingFilter::All => format!("Todas ({})", option.count),
        RatingFilter::Only(rating) => format!("{rating} ★ ({})", option.count),
    }
}

pub fn filter_button_class(option: FilterOption, current: RatingFilter) -> &'static str {
    if !option.enabled {
        "filter-button filter-disabled"
    } else if option.is_selected(current) {
        "filter-button filter-selected"
    } else {
        "filter-button"
    }
}

/// Reviews visible under `filter`, cloned out of the shared list
pub fn visible_reviews(reviews: &[Review], filter: RatingFilter) -> Vec<Review> {
    ReviewSummary::new(reviews, filter)
        .reviews
        .into_iter()
        .cloned()
        .collect()
}

#[component]
pub fn ReviewsSection(reviews: Vec<Review>, average: String, review_count: u32) -> impl IntoView {
    let reviews: Arc<[Review]> = reviews.into();
    let filter = RwSignal::new(RatingFilter::All);

    // Counts never change with the selection, only the visible list does
    let options = filter_options(&RatingCounts::tally(reviews.iter()), reviews.len());
    let visible = Memo::new({
        let reviews = Arc::clone(&reviews);
        move |_| visible_reviews(&reviews, filter.get())
    });

    view! {
        <section id=Section::Reviews.anchor() class="reviews">
            <div class="section-heading">
                <Stars count=5 class="stars-large" />
                <h2>"O que nossos clientes dizem"</h2>
                <p>
                    "Com uma nota média de " <strong>{average}</strong> " baseada em "
                    <strong>{format!("{review_count} avaliações")}</strong>
                    ", somos orgulhosos de servir a comunidade de Betim."
                </p>
            </div>
            <FilterBar options=options filter=filter />
            <div class="reviews-grid">
                <Show
                    when=move || visible.with(|list| !list.is_empty())
                    fallback=move || view! { <NoReviews filter=filter /> }
                >
                    <For
                        each=move || visible.get()
                        key=|review| review.id
                        children=|review| view! { <ReviewCard review=review /> }
                    />
                </Show>
            </div>
        </section>
    }
}

#[component]
pub fn FilterBar(options: Vec<FilterOption>, filter: RwSignal<RatingFilter>) -> impl IntoView {
    view! {
        <div class="filter-bar" role="group" aria-label="Filtrar por nota">
            {options
                .into_iter()
                .map(|option| {
                    let label = option_label(&option);
                    view! {
                        <button
                            class=move || filter_button_class(option, filter.get())
                            disabled=!option.enabled
                            aria-pressed=move || option.is_selected(filter.get()).to_string()
                            on:click=move |_| {
                                if option.enabled {
                                    filter.set(option.filter);
                                }
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let stars = review.rating().map_or(0, |rating| rating.stars());
    let initial = review.initial().map(String::from).unwrap_or_default();
    let class = if review.highlight { "review-card review-highlight" } else { "review-card" };

    view! {
        <article class=class>
            <Stars count=stars />
            <p class="review-text">{format!("\"{}\"", review.text)}</p>
            <div class="review-author">
                <div class="avatar">{initial}</div>
                <div>
                    <p class="author-name">{review.author}</p>
                    <p class="time-ago">{review.time_ago}</p>
                </div>
            </div>
        </article>
    }
}

/// Shown when the selected rating matches nothing
#[component]
pub fn NoReviews(filter: RwSignal<RatingFilter>) -> impl IntoView {
    view! {
        <div class="no-reviews">
            <p>"Nenhuma avaliação encontrada com esta nota."</p>
            <button on:click=move |_| filter.set(RatingFilter::All)>
                "Ver todas as avaliações"
            </button>
        </div>
    }
}
