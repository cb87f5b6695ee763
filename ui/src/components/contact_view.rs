use dioxus::prelude::*;

#[component]
pub fn ContactView() -> Element {
    rsx! {
        div { class: "contact-view",
            div { class: "contact-heading",
                span { class: "section-kicker", "Get in Touch" }
                h2 { "Contact Us" }
                p { "We would love to hear from you." }
            }

            div { class: "contact-columns",
                ContactForm {}

                div { class: "contact-cards",
                    div { class: "contact-card",
                        h4 { "Our Boutique" }
                        p { class: "contact-value", "Bhatti Chowk, Lahore" }
                        p { class: "contact-detail", "Punjab, Pakistan" }
                    }
                    div { class: "contact-card",
                        h4 { "Call Us" }
                        p { class: "contact-value", "03004301223" }
                        p { class: "contact-detail", "Mon - Sat, 10am - 8pm" }
                    }
                    div { class: "contact-card",
                        h4 { "Email Us" }
                        p { class: "contact-value", "atelier@sillage.pk" }
                        p { class: "contact-detail", "We reply within 24 hours" }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sent = use_signal(|| false);

    if *sent.read() {
        return rsx! {
            div { class: "contact-form contact-sent",
                h3 { "Message Sent" }
                p { "Thank you for reaching out. We'll be in touch within 24 hours." }
            }
        };
    }

    let can_send = use_memo(move || {
        !name.read().trim().is_empty()
            && email.read().trim().contains('@')
            && !message.read().trim().is_empty()
    });

    rsx! {
        div { class: "contact-form",
            h3 { "Send us a Message" }
            div { class: "form-row",
                div { class: "form-group",
                    label { "Full Name" }
                    input {
                        r#type: "text",
                        placeholder: "Your name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { "Email Address" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
            }
            div { class: "form-group",
                label { "Subject" }
                input {
                    r#type: "text",
                    placeholder: "Inquiry about Oud Al-Malaki",
                    value: "{subject}",
                    oninput: move |evt| subject.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Message" }
                textarea {
                    rows: "6",
                    placeholder: "Your message here...",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
            }
            button {
                class: "button-dark",
                disabled: !can_send(),
                onclick: move |_| sent.set(true),
                "Send Message"
            }
        }
    }
}
