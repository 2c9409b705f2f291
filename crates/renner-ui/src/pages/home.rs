//! Single landing page assembled from the catalog

use std::sync::Arc;

use leptos::prelude::*;
use renner_core::{Catalog, order_link};

use crate::components::{
    About, ContactSection, Footer, Hero, LoadError, MenuSection, NavBar, ReviewsSection, Services,
};
use crate::error::{href_or_fallback, report};
use crate::state::{PageState, track_scroll, use_catalog};

/// Route view: pulls the catalog from context
#[component]
pub fn Home() -> impl IntoView {
    match use_catalog() {
        Ok(catalog) => view! { <Landing catalog=catalog /> }.into_any(),
        Err(err) => {
            report(&err);
            view! { <LoadError message=err.to_string() /> }.into_any()
        }
    }
}

#[component]
pub fn Landing(catalog: Arc<Catalog>) -> impl IntoView {
    let page = PageState::new();
    track_scroll(page);

    let business = catalog.business().clone();
    let order_href = href_or_fallback(order_link(&business.contact_handle));

    view! {
        <div class="site">
            <NavBar page=page brand=business.name.clone() order_href=order_href.clone() />
            <Hero page=page business=business.clone() order_href=order_href.clone() />
            <Services />
            <About business=business.clone() />
            <MenuSection
                items=catalog.menu().to_vec()
                handle=business.contact_handle.clone()
                order_href=order_href.clone()
            />
            <ReviewsSection
                reviews=catalog.reviews().to_vec()
                average=business.rating_label()
                review_count=business.review_count
            />
            <ContactSection business=business.clone() order_href=order_href />
            <Footer name=business.name map_link=business.map_link />
        </div>
    }
}
