use dioxus::prelude::*;

use sillage_common::session::SessionAccessor;

use super::app::Route;
use super::backend_api::{use_backend_action, BackendAction};
use super::session_state::use_session;

#[component]
pub fn AuthView() -> Element {
    let session = use_session();
    let backend = use_backend_action();
    let nav = use_navigator();

    let mut is_login = use_signal(|| true);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut full_name = use_signal(String::new);

    let can_submit = use_memo(move || {
        let email_ok = email.read().trim().contains('@');
        let password_ok = !password.read().trim().is_empty();
        let name_ok = *is_login.read() || !full_name.read().trim().is_empty();
        email_ok && password_ok && name_ok
    });

    // Signed-in users have no business here.
    if session.read().is_signed_in() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let pending = session.read().pending;
    let error = session.read().last_error.clone();

    let submit = move |_| {
        let email = email.read().trim().to_string();
        let password = password.read().trim().to_string();

        if *is_login.read() {
            backend.send(BackendAction::SignIn { email, password });
        } else {
            backend.send(BackendAction::SignUp {
                email,
                password,
                full_name: full_name.read().trim().to_string(),
            });
        }
    };

    rsx! {
        div { class: "auth-view",
            div { class: "auth-card",
                div { class: "auth-heading",
                    h2 {
                        if *is_login.read() { "Welcome Back" } else { "Create Account" }
                    }
                    p {
                        if *is_login.read() {
                            "Enter your credentials to access your account"
                        } else {
                            "Join the Sillage Atelier community"
                        }
                    }
                }

                if let Some(ref err) = error {
                    div { class: "alert alert-error", "{err}" }
                }

                if !*is_login.read() {
                    div { class: "form-group",
                        label { "Full Name" }
                        input {
                            r#type: "text",
                            placeholder: "Maki Irfan",
                            value: "{full_name}",
                            oninput: move |evt| full_name.set(evt.value()),
                        }
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

                div { class: "form-group",
                    label { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "••••••••",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "button-dark auth-submit",
                    disabled: pending || !can_submit(),
                    onclick: submit,
                    if pending {
                        "Processing..."
                    } else if *is_login.read() {
                        "Sign In"
                    } else {
                        "Create Account"
                    }
                }

                button {
                    class: "auth-switch",
                    onclick: move |_| {
                        let login = *is_login.read();
                        is_login.set(!login);
                    },
                    if *is_login.read() {
                        "Don't have an account? Sign Up"
                    } else {
                        "Already have an account? Sign In"
                    }
                }
            }
        }
    }
}
