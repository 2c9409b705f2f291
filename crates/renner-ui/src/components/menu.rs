//! Menu grid with per-item expandable details and order links

use leptos::prelude::*;
use renner_core::{ContactHandle, MenuItem, Section, item_order_link};

use crate::error::link_href;
use crate::state::ExpandedDetails;

/// Label of the details toggle for the current state
pub fn details_toggle_label(expanded: bool) -> &'static str {
    if expanded { "Ocultar detalhes" } else { "Ver detalhes" }
}

/// `href` ordering one specific item, if the link can be built
pub fn item_order_href(handle: &ContactHandle, item: &MenuItem) -> Option<String> {
    link_href(item_order_link(handle, &item.name))
}

#[component]
pub fn MenuSection(
    items: Vec<MenuItem>,
    handle: ContactHandle,
    order_href: String,
) -> impl IntoView {
    let expanded = RwSignal::new(ExpandedDetails::default());

    view! {
        <section id=Section::Menu.anchor() class="menu">
            <div class="section-heading">
                <h2 class="eyebrow">"Nosso Cardápio"</h2>
                <h3>"Destaques do Dia"</h3>
                <p>
                    "Opções deliciosas preparadas na hora. "
                    "Consulte disponibilidade via WhatsApp."
                </p>
            </div>
            <div class="menu-grid">
                {items
                    .into_iter()
                    .map(|item| {
                        let href = item_order_href(&handle, &item);
                        view! { <MenuItemCard item=item expanded=expanded order_href=href /> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="menu-more">
                <a href=order_href target="_blank" rel="noopener noreferrer">
                    "Ver cardápio completo no WhatsApp"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn MenuItemCard(
    item: MenuItem,
    expanded: RwSignal<ExpandedDetails>,
    order_href: Option<String>,
) -> impl IntoView {
    let id = item.id;
    let is_open = Memo::new(move |_| expanded.with(|details| details.is_expanded(id)));
    let details = item.details_or_default().to_string();
    let order_label = format!("Pedir {}", item.name);

    view! {
        <article class="menu-card">
            <div class="menu-card-image">
                <img src=item.image alt=item.name.clone() loading="lazy" />
                <span class="menu-card-category">{item.category.label()}</span>
            </div>
            <div class="menu-card-body">
                <h4>{item.name.clone()}</h4>
                <p class="menu-card-description">{item.description}</p>
                <button
                    class="details-toggle"
                    aria-expanded=move || is_open.get().to_string()
                    on:click=move |_| expanded.update(|details| details.toggle(id))
                >
                    {move || details_toggle_label(is_open.get())}
                </button>
                <Show when=move || is_open.get()>
                    <div class="menu-card-details">
                        <p class="details-title">"Ingredientes & Preparo:"</p>
                        <p>{details.clone()}</p>
                    </div>
                </Show>
                <div class="menu-card-footer">
                    <span class="price">{item.price}</span>
                    {order_href
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    class="order-item"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=order_label
                                >
                                    "Pedir"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renner_core::MenuCategory;

    #[test]
    fn test_details_toggle_label() {
        assert_eq!(details_toggle_label(false), "Ver detalhes");
        assert_eq!(details_toggle_label(true), "Ocultar detalhes");
    }

    #[test]
    fn test_item_order_href_carries_item_name() -> renner_core::Result<()> {
        let handle = ContactHandle::normalize("5531973144549")?;
        let item = MenuItem::new(2, "Feijão Tropeiro", MenuCategory::SetMeal);
        let href = item_order_href(&handle, &item);
        assert!(href.is_some_and(|h| h.starts_with("https://wa.me/5531973144549?text=")));
        Ok(())
    }
}
