use dioxus::prelude::*;

use sillage_common::currency::format_rupees;
use sillage_common::product::Product;

use super::store_state::{add_to_cart_and_reveal, use_panels, use_store};

#[component]
pub fn WishlistPanel() -> Element {
    let mut store = use_store();
    let mut panels = use_panels();

    if !panels.read().wishlist_open {
        return rsx! {};
    }

    let state = store.read();
    let items: Vec<Product> = state.wishlist_products().into_iter().cloned().collect();
    drop(state);

    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: move |_| panels.write().wishlist_open = false,
        }
        div { class: "side-panel wishlist-panel",
            div { class: "panel-header",
                h2 { "Your Wishlist" }
                button {
                    class: "panel-close",
                    onclick: move |_| panels.write().wishlist_open = false,
                    "✕"
                }
            }

            div { class: "panel-body",
                if items.is_empty() {
                    div { class: "panel-empty",
                        p { "Your wishlist is waiting for your favorite scents." }
                        button {
                            class: "panel-empty-cta",
                            onclick: move |_| panels.write().wishlist_open = false,
                            "Explore Collection"
                        }
                    }
                } else {
                    {items.into_iter().map(|product| {
                        let price = format_rupees(product.default_size().price);
                        let rm_id = product.id.clone();
                        let cart_id = product.id.clone();
                        rsx! {
                            div { class: "wishlist-line",
                                key: "{product.id.0}",
                                div { class: "line-image",
                                    img { src: "{product.image_url}", alt: "{product.name}" }
                                }
                                div { class: "line-body",
                                    div { class: "line-heading",
                                        div {
                                            h3 { "{product.name}" }
                                            p { class: "line-brand", "{product.brand}" }
                                        }
                                        button {
                                            class: "line-remove",
                                            onclick: move |_| {
                                                store.write().toggle_wishlist(&rm_id);
                                            },
                                            "Remove"
                                        }
                                    }
                                    div { class: "line-controls",
                                        p { class: "line-total", "{price}" }
                                        button {
                                            class: "button-dark move-to-cart",
                                            onclick: move |_| {
                                                // Moving to the cart also clears the
                                                // wishlist entry.
                                                add_to_cart_and_reveal(store, panels, &cart_id, None);
                                                store.write().toggle_wishlist(&cart_id);
                                            },
                                            "Add to Cart"
                                        }
                                    }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
