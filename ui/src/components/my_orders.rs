use dioxus::prelude::*;

use sillage_common::currency::format_rupees;
use sillage_common::session::SessionAccessor;

use super::app::Route;
use super::backend_api::{BackendClient, OrderRecord};
use super::session_state::use_session;

#[component]
pub fn MyOrders() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut orders = use_signal(Vec::<OrderRecord>::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        let Some(email) = session.read().profile.as_ref().map(|p| p.email.clone()) else {
            return;
        };
        spawn(async move {
            match BackendClient::from_env() {
                Some(client) => match client.orders_for(&email).await {
                    Ok(history) => orders.set(history),
                    Err(err) => {
                        tracing::error!("Order history fetch failed: {err}");
                        error_msg.set(Some(err));
                    }
                },
                None => {
                    tracing::debug!("Order history unavailable (offline mode)");
                }
            }
            loading.set(false);
        });
    });

    if !session.read().is_signed_in() {
        nav.replace(Route::Auth {});
        return rsx! {};
    }

    let is_loading = *loading.read();

    rsx! {
        div { class: "orders-view",
            h2 { "Your Orders" }

            if let Some(ref err) = *error_msg.read() {
                div { class: "alert alert-error", "{err}" }
            } else if is_loading {
                p { class: "empty-state", "Fetching your order history..." }
            } else if orders.read().is_empty() {
                div { class: "orders-empty",
                    h3 { "No orders yet" }
                    p {
                        "Your fragrance journey is just beginning. Explore our \
                         collection to find your first signature scent."
                    }
                    button {
                        class: "button-dark",
                        onclick: move |_| { nav.push(Route::Collection {}); },
                        "Explore Collection"
                    }
                }
            } else {
                div { class: "order-list",
                    {orders.read().iter().map(|order| {
                        let total = format_rupees(order.total_amount);
                        rsx! {
                            div { class: "order-card",
                                key: "{order.id}",
                                div { class: "order-header",
                                    div {
                                        p { class: "order-label", "Order ID" }
                                        p { class: "mono", "#{order.id}" }
                                    }
                                    div {
                                        p { class: "order-label", "Date" }
                                        p { "{order.created_at}" }
                                    }
                                    div { class: "order-summary",
                                        span { class: "status-pill", "{order.status}" }
                                        p { class: "order-total", "{total}" }
                                    }
                                }
                                div { class: "order-items",
                                    {order.items.iter().enumerate().map(|(i, item)| {
                                        let price = format_rupees(item.unit_price);
                                        rsx! {
                                            div { class: "order-item",
                                                key: "{order.id}-{i}",
                                                if !item.image_url.is_empty() {
                                                    div { class: "line-image",
                                                        img { src: "{item.image_url}", alt: "{item.name}" }
                                                    }
                                                }
                                                div { class: "order-item-body",
                                                    h4 { "{item.name}" }
                                                    p { class: "line-size",
                                                        "{item.size_label} | Qty: {item.quantity}"
                                                    }
                                                }
                                                p { class: "line-total", "{price}" }
                                            }
                                        }
                                    })}
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
