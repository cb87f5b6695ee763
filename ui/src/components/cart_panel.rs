use dioxus::prelude::*;

use sillage_common::cart::CartLine;
use sillage_common::currency::format_rupees;

use super::store_state::{use_panels, use_store};

#[component]
pub fn CartPanel() -> Element {
    let mut store = use_store();
    let mut panels = use_panels();

    if !panels.read().cart_open {
        return rsx! {};
    }

    let state = store.read();
    let lines: Vec<CartLine> = state.cart.lines.clone();
    let subtotal = format_rupees(state.cart.subtotal());
    drop(state);

    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: move |_| panels.write().cart_open = false,
        }
        div { class: "side-panel cart-panel",
            div { class: "panel-header",
                h2 { "Your Selection" }
                button {
                    class: "panel-close",
                    onclick: move |_| panels.write().cart_open = false,
                    "✕"
                }
            }

            div { class: "panel-body",
                if lines.is_empty() {
                    div { class: "panel-empty",
                        p { "Your cart is as empty as a scentless garden." }
                        button {
                            class: "panel-empty-cta",
                            onclick: move |_| panels.write().cart_open = false,
                            "Start Shopping"
                        }
                    }
                } else {
                    {lines.into_iter().map(|line| {
                        let line_total = format_rupees(line.line_total());
                        let dec_id = line.product_id.clone();
                        let dec_size = line.size_label.clone();
                        let inc_id = line.product_id.clone();
                        let inc_size = line.size_label.clone();
                        let rm_id = line.product_id.clone();
                        let rm_size = line.size_label.clone();
                        rsx! {
                            div { class: "cart-line",
                                key: "{line.product_id.0}-{line.size_label}",
                                div { class: "line-image",
                                    img { src: "{line.image_url}", alt: "{line.name}" }
                                }
                                div { class: "line-body",
                                    div { class: "line-heading",
                                        div {
                                            h3 { "{line.name}" }
                                            p { class: "line-size", "{line.size_label}" }
                                            p { class: "line-brand", "{line.brand}" }
                                        }
                                        button {
                                            class: "line-remove",
                                            onclick: move |_| {
                                                store.write().remove_cart_line(&rm_id, &rm_size);
                                            },
                                            "Remove"
                                        }
                                    }
                                    div { class: "line-controls",
                                        div { class: "quantity-stepper",
                                            button {
                                                onclick: move |_| {
                                                    store.write().update_cart_quantity(&dec_id, &dec_size, -1);
                                                },
                                                "−"
                                            }
                                            span { "{line.quantity}" }
                                            button {
                                                onclick: move |_| {
                                                    store.write().update_cart_quantity(&inc_id, &inc_size, 1);
                                                },
                                                "+"
                                            }
                                        }
                                        p { class: "line-total", "{line_total}" }
                                    }
                                }
                            }
                        }
                    })}
                }
            }

            if !store.read().cart.is_empty() {
                div { class: "panel-footer",
                    div { class: "subtotal-row",
                        span { "Subtotal" }
                        span { class: "subtotal-amount", "{subtotal}" }
                    }
                    p { class: "panel-note", "Shipping and taxes calculated at checkout" }
                    button { class: "button-dark checkout", "Proceed to Checkout" }
                }
            }
        }
    }
}
