use dioxus::prelude::*;

use super::markdown::Markdown;

const STORY_MD: &str = include_str!("../../docs/our_story.md");

const STORY_IMAGE: &str =
    "https://images.unsplash.com/photo-1557170334-a9632e77c6e4?auto=format&fit=crop&q=80&w=1000";

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "about-view",
            div { class: "about-hero",
                div { class: "about-image",
                    img { src: STORY_IMAGE, alt: "Fragrance still life" }
                    div { class: "about-quote",
                        p { class: "quote-text", "\"Lahore is Lahore.\"" }
                        p { class: "quote-source", "— Traditional Proverb" }
                    }
                }
                div { class: "about-copy",
                    span { class: "section-kicker", "Our Heritage" }
                    h2 { "Lahore's Finest Olfactory Art" }
                    Markdown { source: STORY_MD, class: "story-body" }
                }
            }
        }
    }
}
