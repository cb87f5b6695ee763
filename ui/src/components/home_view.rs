use dioxus::prelude::*;

use super::hero::Hero;
use super::scent_curator::{CuratorClient, FALLBACK_COPY};

const FEATURED_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1594035910387-fea47794261f?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1541643600914-78b084683601?auto=format&fit=crop&q=80&w=1200",
];

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "home-view",
            Hero {}
            CuratorSection {}
            FeaturedSection {}
        }
    }
}

/// The AI Fragrance Curator: one button, one short blurb. Falls back to
/// fixed marketing copy whenever the collaborator is unavailable or the
/// call fails.
#[component]
fn CuratorSection() -> Element {
    let mut recommendation = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let consult = move |_| {
        loading.set(true);
        spawn(async move {
            let blurb = match CuratorClient::from_env() {
                Some(client) => match client.recommend().await {
                    Ok(text) => text,
                    Err(err) => {
                        tracing::error!("Curator call failed: {err}");
                        FALLBACK_COPY.to_string()
                    }
                },
                None => {
                    tracing::debug!("Curator unavailable (no API key configured)");
                    FALLBACK_COPY.to_string()
                }
            };
            recommendation.set(Some(blurb));
            loading.set(false);
        });
    };

    let is_loading = *loading.read();

    rsx! {
        section { class: "curator-section",
            div { class: "curator-card",
                div { class: "curator-intro",
                    span { class: "section-kicker", "AI Fragrance Curator" }
                    h2 { "Find Your Signature Scent" }
                    p {
                        "Our AI-powered curator analyzes your preferences to suggest \
                         the perfect fragrance for your unique personality."
                    }
                    button {
                        class: "button-dark",
                        disabled: is_loading,
                        onclick: consult,
                        if is_loading { "Consulting the Oracle..." } else { "Get Recommendation" }
                    }
                }
                div { class: "curator-result",
                    if let Some(ref blurb) = *recommendation.read() {
                        blockquote { class: "curator-blurb", "\"{blurb}\"" }
                    } else {
                        div { class: "curator-placeholder",
                            p { "Your personalized recommendation will appear here..." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturedSection() -> Element {
    rsx! {
        section { class: "featured-section",
            h2 { "Experience Luxury" }
            p {
                "From the bustling streets of Lahore to the quiet valleys of the \
                 North, our scents capture the essence of Pakistan's rich heritage."
            }
            div { class: "featured-grid",
                {FEATURED_IMAGES.iter().map(|src| rsx! {
                    div { class: "featured-tile",
                        key: "{src}",
                        img { src: "{src}", alt: "Featured fragrance" }
                    }
                })}
            }
        }
    }
}
