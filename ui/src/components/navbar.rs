use dioxus::prelude::*;

use sillage_common::session::SessionAccessor;

use super::app::Route;
use super::backend_api::{use_backend_action, BackendAction};
use super::session_state::use_session;
use super::store_state::{use_panels, use_store};

#[component]
pub fn Navbar() -> Element {
    let store = use_store();
    let mut panels = use_panels();
    let session = use_session();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);
    let mut user_menu_open = use_signal(|| false);

    let state = store.read();
    let cart_count = state.cart.item_count();
    let wishlist_count = state.wishlist.len();
    drop(state);

    let signed_in = session.read().is_signed_in();

    rsx! {
        nav { class: "navbar",
            button {
                class: "nav-menu-toggle",
                onclick: move |_| {
                    let open = *menu_open.read();
                    menu_open.set(!open);
                },
                if *menu_open.read() { "✕" } else { "☰" }
            }

            button {
                class: "nav-logo",
                onclick: move |_| { nav.push(Route::Home {}); },
                h1 { "Sillage " span { class: "accent", "Atelier" } }
            }

            div { class: "nav-links",
                NavLinks { on_navigate: move |_| menu_open.set(false) }
            }

            div { class: "nav-actions",
                div { class: "nav-user",
                    if signed_in {
                        button {
                            class: "nav-avatar",
                            onclick: move |_| {
                                let open = *user_menu_open.read();
                                user_menu_open.set(!open);
                            },
                            if let Some(initial) = session.read().initial() {
                                span { "{initial}" }
                            }
                        }
                        if *user_menu_open.read() {
                            UserMenu { on_close: move |_| user_menu_open.set(false) }
                        }
                    } else {
                        button {
                            class: "nav-icon",
                            onclick: move |_| { nav.push(Route::Auth {}); },
                            "Sign In"
                        }
                    }
                }

                button {
                    class: "nav-icon",
                    onclick: move |_| panels.write().wishlist_open = true,
                    "♡"
                    if wishlist_count > 0 {
                        span { class: "badge badge-wishlist", "{wishlist_count}" }
                    }
                }
                button {
                    class: "nav-icon",
                    onclick: move |_| panels.write().cart_open = true,
                    "Cart"
                    if cart_count > 0 {
                        span { class: "badge badge-cart", "{cart_count}" }
                    }
                }
            }

            if *menu_open.read() {
                div { class: "nav-mobile-menu",
                    NavLinks { on_navigate: move |_| menu_open.set(false) }
                }
            }
        }
    }
}

#[component]
fn NavLinks(on_navigate: EventHandler<()>) -> Element {
    let nav = use_navigator();

    let links: &[(&str, Route)] = &[
        ("Home", Route::Home {}),
        ("Collection", Route::Collection {}),
        ("Founders", Route::Founders {}),
        ("Our Story", Route::About {}),
        ("Contact", Route::Contact {}),
    ];

    rsx! {
        {links.iter().map(|(label, route)| {
            let route = route.clone();
            rsx! {
                button {
                    class: "nav-link",
                    key: "{label}",
                    onclick: move |_| {
                        nav.push(route.clone());
                        on_navigate.call(());
                    },
                    "{label}"
                }
            }
        })}
    }
}

#[component]
fn UserMenu(on_close: EventHandler<()>) -> Element {
    let session = use_session();
    let backend = use_backend_action();
    let nav = use_navigator();

    let state = session.read();
    let name = state.display_name().unwrap_or_else(|| "User".into());
    let email = state
        .profile
        .as_ref()
        .map(|p| p.email.clone())
        .unwrap_or_default();
    let is_admin = state.is_admin();
    drop(state);

    rsx! {
        div { class: "user-menu",
            div { class: "user-menu-header",
                p { class: "user-menu-name", "{name}" }
                p { class: "user-menu-email", "{email}" }
            }
            button {
                onclick: move |_| {
                    nav.push(Route::Orders {});
                    on_close.call(());
                },
                "My Orders"
            }
            if is_admin {
                button {
                    class: "user-menu-admin",
                    onclick: move |_| {
                        nav.push(Route::Admin {});
                        on_close.call(());
                    },
                    "Admin Panel"
                }
            }
            button {
                class: "user-menu-signout",
                onclick: move |_| {
                    backend.send(BackendAction::SignOut);
                    on_close.call(());
                },
                "Sign Out"
            }
        }
    }
}
