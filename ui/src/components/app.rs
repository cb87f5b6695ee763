use dioxus::prelude::*;

use sillage_common::store::StoreState;

use super::about_view::AboutView;
use super::admin_view::AdminView;
use super::auth_view::AuthView;
use super::backend_api::use_backend_coroutine;
use super::cart_panel::CartPanel;
use super::collection_view::CollectionView;
use super::contact_view::ContactView;
use super::founders_view::FoundersView;
use super::home_view::HomeView;
use super::my_orders::MyOrders;
use super::navbar::Navbar;
use super::product_detail::ProductDetail;
use super::session_state::SessionState;
use super::store_state::Panels;
use super::wishlist_panel::WishlistPanel;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/collection")]
    Collection {},
    #[route("/founders")]
    Founders {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/auth")]
    Auth {},
    #[route("/admin")]
    Admin {},
    #[route("/orders")]
    Orders {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(StoreState::seeded()));
    use_context_provider(|| Signal::new(SessionState::default()));
    use_context_provider(|| Signal::new(Panels::default()));
    use_backend_coroutine();

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

#[component]
fn AppLayout() -> Element {
    rsx! {
        div { class: "sillage-app",
            Navbar {}
            main { class: "page-body",
                Outlet::<Route> {}
            }
            Footer {}

            // Overlays live above every page.
            CartPanel {}
            WishlistPanel {}
            ProductDetail {}
        }
    }
}

/// Route component: the landing page.
#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

/// Route component: the filterable collection grid.
#[component]
fn Collection() -> Element {
    rsx! { CollectionView {} }
}

#[component]
fn Founders() -> Element {
    rsx! { FoundersView {} }
}

#[component]
fn About() -> Element {
    rsx! { AboutView {} }
}

#[component]
fn Contact() -> Element {
    rsx! { ContactView {} }
}

#[component]
fn Auth() -> Element {
    rsx! { AuthView {} }
}

/// Route component: admin dashboard, gated inside the view.
#[component]
fn Admin() -> Element {
    rsx! { AdminView {} }
}

#[component]
fn Orders() -> Element {
    rsx! { MyOrders {} }
}

#[component]
fn Footer() -> Element {
    let nav = use_navigator();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-main",
                div { class: "footer-brand",
                    h2 { "Sillage " span { class: "accent", "Atelier" } }
                    p { class: "footer-blurb",
                        "Elevate your presence with our exquisite range of luxury \
                         fragrances from the heart of Lahore. Subscribe to our \
                         newsletter for exclusive launches and olfactory insights."
                    }
                    p { class: "footer-contact", "Bhatti Chowk, Lahore, Pakistan" }
                    p { class: "footer-contact", "03004301223 | atelier@sillage.pk" }
                }
                div { class: "footer-links",
                    h3 { "Quick Links" }
                    ul {
                        li {
                            button {
                                onclick: move |_| { nav.push(Route::Collection {}); },
                                "Shop All"
                            }
                        }
                        li {
                            button {
                                onclick: move |_| { nav.push(Route::Collection {}); },
                                "Attar Collection"
                            }
                        }
                        li {
                            button {
                                onclick: move |_| { nav.push(Route::About {}); },
                                "Our Story"
                            }
                        }
                        li {
                            button {
                                onclick: move |_| { nav.push(Route::Contact {}); },
                                "Contact Us"
                            }
                        }
                    }
                }
                div { class: "footer-newsletter",
                    h3 { "Newsletter" }
                    NewsletterForm {}
                }
            }
            div { class: "footer-legal",
                p { "© 2026 Sillage Atelier. All Rights Reserved." }
            }
        }
    }
}

#[component]
fn NewsletterForm() -> Element {
    let mut email = use_signal(String::new);
    let mut subscribed = use_signal(|| false);

    rsx! {
        if *subscribed.read() {
            p { class: "newsletter-thanks", "Thank you — you're on the list." }
        } else {
            div { class: "newsletter-form",
                input {
                    r#type: "email",
                    placeholder: "Your email address",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                button {
                    disabled: email.read().trim().is_empty(),
                    onclick: move |_| subscribed.set(true),
                    "Subscribe"
                }
            }
        }
    }
}
