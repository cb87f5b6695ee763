use dioxus::prelude::*;

struct Founder {
    name: &'static str,
    title: &'static str,
    quote: &'static str,
    image: &'static str,
}

const FOUNDERS: [Founder; 2] = [
    Founder {
        name: "Maki Irfan",
        title: "Founder & Master Perfumer",
        quote: "Fragrance is the most intense form of memory. We share a piece of \
                Lahore's soul in every bottle.",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?auto=format&fit=crop&q=80&w=800",
    },
    Founder {
        name: "Zaid Ahmed",
        title: "Co-Founder & Creative Director",
        quote: "Our mission is to bring the timeless elegance of traditional attars \
                to the modern world.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=800",
    },
];

#[component]
pub fn FoundersView() -> Element {
    rsx! {
        div { class: "founders-view",
            div { class: "founders-heading",
                span { class: "section-kicker", "The Visionaries" }
                h2 { "Meet Our Founders" }
                p { "The heart and mind behind Lahore's most exquisite scents." }
            }

            div { class: "founders-grid",
                {FOUNDERS.iter().map(|founder| rsx! {
                    div { class: "founder-card",
                        key: "{founder.name}",
                        div { class: "founder-portrait",
                            img { src: "{founder.image}", alt: "{founder.name}" }
                            p { class: "founder-quote", "\"{founder.quote}\"" }
                        }
                        h3 { "{founder.name}" }
                        p { class: "founder-title", "{founder.title}" }
                    }
                })}
            }

            div { class: "founders-philosophy",
                h3 { "Our Philosophy" }
                p {
                    "We believe that a fragrance is more than just a scent; it's an \
                     identity. Our founders have spent decades traveling the world to \
                     source the finest ingredients, from the deep forests of Cambodia \
                     to the rose valleys of Bulgaria, all to bring you a collection \
                     that is truly unique."
                }
            }
        }
    }
}
