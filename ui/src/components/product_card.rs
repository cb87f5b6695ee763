use dioxus::prelude::*;

use sillage_common::currency::format_rupees;
use sillage_common::product::Product;

use super::store_state::{add_to_cart_and_reveal, use_panels, use_store};

/// Star row rendered from an average rating; 0.0 (unrated) shows all
/// empty stars.
pub fn stars(average: f64) -> String {
    let filled = average.round() as usize;
    (1..=5)
        .map(|i| if i <= filled { '★' } else { '☆' })
        .collect()
}

#[component]
pub fn ProductCard(product: Product) -> Element {
    let store = use_store();
    let mut panels = use_panels();

    let in_wishlist = store.read().wishlist.contains(&product.id);
    let price = format_rupees(product.default_size().price);
    let rating = stars(product.average_rating());
    let review_count = product.review_count();

    let id_for_detail = product.id.clone();
    let id_for_cart = product.id.clone();
    let id_for_wishlist = product.id.clone();

    rsx! {
        div { class: "product-card",
            div {
                class: "product-card-image",
                onclick: move |_| panels.write().selected = Some(id_for_detail.clone()),
                img { src: "{product.image_url}", alt: "{product.name}" }
                span { class: "category-tag", "{product.category.label()}" }
                div { class: "product-card-actions",
                    button {
                        class: "card-action",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            add_to_cart_and_reveal(store, panels, &id_for_cart, None);
                        },
                        "+"
                    }
                    button {
                        class: if in_wishlist { "card-action card-action-active" } else { "card-action" },
                        onclick: move |evt| {
                            evt.stop_propagation();
                            let mut store = store;
                            store.write().toggle_wishlist(&id_for_wishlist);
                        },
                        "♡"
                    }
                }
            }
            div { class: "product-card-body",
                p { class: "product-brand", "{product.brand}" }
                h3 { class: "product-name", "{product.name}" }
                div { class: "product-rating",
                    span { class: "stars", "{rating}" }
                    if review_count > 0 {
                        span { class: "review-count", "({review_count})" }
                    }
                }
                p { class: "product-blurb", "{product.description}" }
                p { class: "product-price", "{price}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stars;

    #[test]
    fn unrated_products_show_empty_stars() {
        assert_eq!(stars(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn averages_round_to_the_nearest_star() {
        assert_eq!(stars(4.666), "★★★★★");
        assert_eq!(stars(4.4), "★★★★☆");
        assert_eq!(stars(1.0), "★☆☆☆☆");
    }
}
