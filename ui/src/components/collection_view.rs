use dioxus::prelude::*;

use sillage_common::product::{Product, ProductCategory};

use super::filter_bar::FilterBar;
use super::product_card::ProductCard;
use super::store_state::use_store;

#[component]
pub fn CollectionView() -> Element {
    let mut store = use_store();

    let state = store.read();
    let active_category = state.selection.category;
    // Collect owned clones so the store borrow ends before rendering.
    let products: Vec<Product> = state
        .visible_products()
        .into_iter()
        .cloned()
        .collect();
    drop(state);

    rsx! {
        div { class: "collection-view",
            div { class: "collection-heading",
                h2 { "The Collection" }
                div { class: "category-tabs",
                    button {
                        class: if active_category.is_none() { "tab tab-active" } else { "tab" },
                        onclick: move |_| store.write().selection.category = None,
                        "All"
                    }
                    {ProductCategory::all().iter().map(|&category| {
                        let is_active = active_category == Some(category);
                        rsx! {
                            button {
                                class: if is_active { "tab tab-active" } else { "tab" },
                                key: "{category.label()}",
                                onclick: move |_| {
                                    store.write().selection.category = Some(category);
                                },
                                "{category.label()}s"
                            }
                        }
                    })}
                }
            }

            FilterBar {}

            if products.is_empty() {
                div { class: "empty-state",
                    p { "No fragrances match your current selection." }
                    button {
                        class: "clear-filters",
                        onclick: move |_| store.write().selection.clear_filters(),
                        "Clear All Filters"
                    }
                }
            } else {
                div { class: "product-grid",
                    {products.into_iter().map(|product| {
                        let key = product.id.0.clone();
                        rsx! {
                            ProductCard { key: "{key}", product }
                        }
                    })}
                }
            }
        }
    }
}
