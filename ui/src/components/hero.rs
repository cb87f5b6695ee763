use dioxus::prelude::*;

use super::app::Route;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1512568400610-62da28bc8a13?auto=format&fit=crop&q=80&w=2000";

#[component]
pub fn Hero() -> Element {
    let nav = use_navigator();

    rsx! {
        section { class: "hero",
            div { class: "hero-backdrop",
                img { src: HERO_IMAGE, alt: "Luxury perfume bottles" }
                div { class: "hero-overlay" }
            }
            div { class: "hero-content",
                span { class: "hero-kicker", "Est. 1992" }
                h1 {
                    "The Art of "
                    br {}
                    em { "Exquisite" }
                    " Fragrance"
                }
                p {
                    "Discover our curated collection of artisanal perfumes and \
                     traditional attars, crafted with the rarest ingredients from \
                     around the globe."
                }
                div { class: "hero-actions",
                    button {
                        class: "button-gold",
                        onclick: move |_| { nav.push(Route::Collection {}); },
                        "Shop Collection"
                    }
                    button {
                        class: "button-ghost",
                        onclick: move |_| { nav.push(Route::Collection {}); },
                        "Explore Attars"
                    }
                }
            }
        }
    }
}
