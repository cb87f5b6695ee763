use dioxus::prelude::*;

use sillage_common::currency::format_rupees;
use sillage_common::product::Product;
use sillage_common::session::SessionAccessor;

use super::app::Route;
use super::product_card::stars;
use super::session_state::use_session;
use super::store_state::{add_to_cart_and_reveal, use_panels, use_store};

/// Overlay for the currently selected product. The product is re-read
/// from the catalog on every render, so a just-submitted review is
/// visible immediately.
#[component]
pub fn ProductDetail() -> Element {
    let store = use_store();
    let mut panels = use_panels();

    let Some(selected) = panels.read().selected.clone() else {
        return rsx! {};
    };
    let Some(product) = store.read().catalog.find(&selected).cloned() else {
        return rsx! {};
    };

    let key = product.id.0.clone();

    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: move |_| panels.write().selected = None,
        }
        // Keyed by product id so size/form state resets between products.
        DetailBody { key: "{key}", product }
    }
}

#[component]
fn DetailBody(product: Product) -> Element {
    let store = use_store();
    let mut panels = use_panels();

    let default_label = product.default_size().label.clone();
    let mut selected_size = use_signal(|| default_label);

    let in_wishlist = store.read().wishlist.contains(&product.id);
    let rating_row = stars(product.average_rating());
    let review_count = product.review_count();

    let chosen_price = product
        .sizes
        .iter()
        .find(|s| s.label == *selected_size.read())
        .map(|s| s.price)
        .unwrap_or_else(|| product.default_size().price);
    let price = format_rupees(chosen_price);

    let id_for_cart = product.id.clone();
    let id_for_wishlist = product.id.clone();

    rsx! {
        div { class: "product-detail",
            button {
                class: "detail-close",
                onclick: move |_| panels.write().selected = None,
                "✕"
            }

            div { class: "detail-image",
                img { src: "{product.image_url}", alt: "{product.name}" }
                div { class: "detail-tags",
                    span { class: "tag", "{product.category.label()}" }
                    span { class: "tag tag-gold", "{product.family.label()}" }
                }
            }

            div { class: "detail-content",
                p { class: "detail-brand", "{product.brand}" }
                h2 { "{product.name}" }
                div { class: "detail-rating",
                    span { class: "stars", "{rating_row}" }
                    span { class: "review-count", "{review_count} Verified Reviews" }
                }

                div { class: "size-picker",
                    h4 { "Select Size" }
                    div { class: "size-options",
                        {product.sizes.iter().map(|size| {
                            let label = size.label.clone();
                            let is_active = *selected_size.read() == size.label;
                            rsx! {
                                button {
                                    class: if is_active { "size-option size-option-active" } else { "size-option" },
                                    key: "{size.label}",
                                    onclick: move |_| selected_size.set(label.clone()),
                                    "{size.label}"
                                }
                            }
                        })}
                    }
                }

                p { class: "detail-price", "{price}" }
                p { class: "detail-description", "{product.description}" }

                div { class: "notes-grid",
                    NoteColumn { title: "Top Notes", notes: product.notes.top.clone() }
                    NoteColumn { title: "Heart Notes", notes: product.notes.middle.clone() }
                    NoteColumn { title: "Base Notes", notes: product.notes.base.clone() }
                }

                div { class: "detail-actions",
                    button {
                        class: "button-dark",
                        onclick: move |_| {
                            let label = selected_size.read().clone();
                            add_to_cart_and_reveal(store, panels, &id_for_cart, Some(&label));
                        },
                        "Add to Selection"
                    }
                    button {
                        class: if in_wishlist { "wishlist-toggle wishlist-toggle-active" } else { "wishlist-toggle" },
                        onclick: move |_| {
                            let mut store = store;
                            store.write().toggle_wishlist(&id_for_wishlist);
                        },
                        "♡"
                    }
                }

                ReviewSection { product: product.clone() }
            }
        }
    }
}

#[component]
fn NoteColumn(title: &'static str, notes: Vec<String>) -> Element {
    rsx! {
        div { class: "note-column",
            h4 { "{title}" }
            ul {
                {notes.iter().map(|note| rsx! {
                    li { key: "{note}", "{note}" }
                })}
            }
        }
    }
}

#[component]
fn ReviewSection(product: Product) -> Element {
    let mut store = use_store();
    let session = use_session();
    let nav = use_navigator();
    let mut panels = use_panels();

    let mut show_form = use_signal(|| false);
    let mut rating = use_signal(|| 5u8);
    let mut comment = use_signal(String::new);

    let signed_in = session.read().is_signed_in();
    let product_id = product.id.clone();

    let submit = move |_| {
        let text = comment.read().clone();
        let session_snapshot = session.read().clone();
        let accepted = store
            .write()
            .submit_review_today(&session_snapshot, &product_id, *rating.read(), &text);
        if accepted.is_some() {
            comment.set(String::new());
            rating.set(5);
            show_form.set(false);
        }
    };

    rsx! {
        div { class: "review-section",
            div { class: "review-heading",
                h3 { "Customer Reviews" }
                button {
                    class: "review-toggle",
                    onclick: move |_| {
                        let open = *show_form.read();
                        show_form.set(!open);
                    },
                    if *show_form.read() { "Cancel" } else { "Write a Review" }
                }
            }

            if *show_form.read() {
                if signed_in {
                    div { class: "review-form",
                        div { class: "rating-picker",
                            span { "Your Rating:" }
                            {(1..=5u8).map(|value| {
                                let filled = value <= *rating.read();
                                rsx! {
                                    button {
                                        class: if filled { "star-button star-filled" } else { "star-button" },
                                        key: "{value}",
                                        onclick: move |_| rating.set(value),
                                        if filled { "★" } else { "☆" }
                                    }
                                }
                            })}
                        }
                        textarea {
                            placeholder: "What did you think of this scent?",
                            value: "{comment}",
                            oninput: move |evt| comment.set(evt.value()),
                        }
                        button {
                            class: "button-dark",
                            disabled: comment.read().trim().is_empty(),
                            onclick: submit,
                            "Post Review"
                        }
                    }
                } else {
                    div { class: "review-signin-prompt",
                        p { "Please sign in to share your experience with this fragrance." }
                        button {
                            class: "button-dark",
                            onclick: move |_| {
                                panels.write().selected = None;
                                nav.push(Route::Auth {});
                            },
                            "Sign In to Review"
                        }
                    }
                }
            }

            div { class: "review-list",
                if product.reviews.is_empty() {
                    p { class: "empty-state", "No reviews yet. Be the first to share your thoughts." }
                } else {
                    {product.reviews.iter().map(|review| {
                        let star_row = stars(review.rating as f64);
                        rsx! {
                            div { class: "review-card",
                                key: "{review.id.0}",
                                div { class: "review-meta",
                                    div {
                                        p { class: "review-author", "{review.user_name}" }
                                        span { class: "stars stars-small", "{star_row}" }
                                    }
                                    span { class: "review-date", "{review.date}" }
                                }
                                p { class: "review-comment", "\"{review.comment}\"" }
                            }
                        }
                    })}
                }
            }
        }
    }
}
