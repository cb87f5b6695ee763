//! HTTP client for the managed storefront backend.
//!
//! Covers the thin remote surface: the auth handshake plus read-only
//! CRUD over profiles, products, reviews and orders for the admin and
//! order-history pages. Backend URL is determined from the
//! `SILLAGE_BACKEND_URL` compile-time env var; without one the app runs
//! in offline mode and auth falls back to a local session.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::session_state::{use_session, Profile};

/// Get the backend base URL from compile-time env vars.
fn backend_url() -> Option<String> {
    option_env!("SILLAGE_BACKEND_URL")
        .filter(|url| !url.is_empty())
        .map(String::from)
}

// ─── Request/Response types ──────────────────────────────────────────────────

#[derive(Serialize)]
struct SignInRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct SignUpRequest {
    email: String,
    password: String,
    full_name: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    profile: Profile,
}

/// A row in the admin Users table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// A row in the admin Products table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
}

/// A row in the admin Reviews table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReviewRow {
    pub id: String,
    pub user_name: String,
    pub product_name: String,
    pub rating: u8,
    pub comment: String,
}

/// A row in the admin Orders table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrderRow {
    pub id: String,
    pub customer_name: String,
    pub total_amount: u64,
    pub status: String,
}

/// One fulfilled line inside a historical order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrderItemRecord {
    pub name: String,
    pub size_label: String,
    pub quantity: u32,
    pub unit_price: u64,
    #[serde(default)]
    pub image_url: String,
}

/// A historical order for the signed-in user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub created_at: String,
    pub status: String,
    pub total_amount: u64,
    pub items: Vec<OrderItemRecord>,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Storefront backend client. Only functional in WASM builds with a
/// backend URL configured.
pub struct BackendClient {
    base_url: String,
}

impl BackendClient {
    /// Create a client from compile-time env vars. Returns None when no
    /// backend is configured.
    pub fn from_env() -> Option<Self> {
        backend_url().map(|url| Self { base_url: url })
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, String> {
        let body = serde_json::to_string(&SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| e.to_string())?;
        let resp = post_json(&self.base_url, "/auth/sign-in", &body).await?;
        let auth: AuthResponse =
            serde_json::from_str(&resp).map_err(|e| format!("Parse sign-in response: {e}"))?;
        Ok(auth.profile)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Profile, String> {
        let body = serde_json::to_string(&SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        })
        .map_err(|e| e.to_string())?;
        let resp = post_json(&self.base_url, "/auth/sign-up", &body).await?;
        let auth: AuthResponse =
            serde_json::from_str(&resp).map_err(|e| format!("Parse sign-up response: {e}"))?;
        Ok(auth.profile)
    }

    pub async fn list_users(&self) -> Result<Vec<UserRow>, String> {
        let resp = get_json(&self.base_url, "/admin/users").await?;
        serde_json::from_str(&resp).map_err(|e| format!("Parse users: {e}"))
    }

    pub async fn list_products(&self) -> Result<Vec<ProductRow>, String> {
        let resp = get_json(&self.base_url, "/admin/products").await?;
        serde_json::from_str(&resp).map_err(|e| format!("Parse products: {e}"))
    }

    pub async fn list_reviews(&self) -> Result<Vec<ReviewRow>, String> {
        let resp = get_json(&self.base_url, "/admin/reviews").await?;
        serde_json::from_str(&resp).map_err(|e| format!("Parse reviews: {e}"))
    }

    pub async fn list_orders(&self) -> Result<Vec<OrderRow>, String> {
        let resp = get_json(&self.base_url, "/admin/orders").await?;
        serde_json::from_str(&resp).map_err(|e| format!("Parse orders: {e}"))
    }

    /// Order history for one user, newest first.
    pub async fn orders_for(&self, email: &str) -> Result<Vec<OrderRecord>, String> {
        let path = format!("/orders?email={email}");
        let resp = get_json(&self.base_url, &path).await?;
        serde_json::from_str(&resp).map_err(|e| format!("Parse order history: {e}"))
    }
}

// ─── Auth coroutine ──────────────────────────────────────────────────────────

/// Actions the UI can send to the auth collaborator via the coroutine.
#[derive(Debug, Clone)]
pub enum BackendAction {
    SignIn { email: String, password: String },
    SignUp {
        email: String,
        password: String,
        full_name: String,
    },
    SignOut,
}

/// Get a handle to send actions to the backend coroutine.
pub fn use_backend_action() -> Coroutine<BackendAction> {
    use_coroutine_handle::<BackendAction>()
}

/// Start the backend communication coroutine.
///
/// With `SILLAGE_BACKEND_URL` configured the auth handshake goes to the
/// remote backend; otherwise sign-in/up resolve to a local offline
/// profile so the rest of the storefront stays usable.
pub fn use_backend_coroutine() {
    let mut session = use_session();

    use_coroutine(move |mut rx: UnboundedReceiver<BackendAction>| async move {
        use futures::StreamExt;

        while let Some(action) = rx.next().await {
            match action {
                BackendAction::SignIn { email, password } => {
                    session.write().pending = true;
                    match BackendClient::from_env() {
                        Some(client) => match client.sign_in(&email, &password).await {
                            Ok(profile) => session.write().sign_in(profile),
                            Err(err) => {
                                tracing::error!("Sign-in failed: {err}");
                                let mut state = session.write();
                                state.pending = false;
                                state.last_error = Some(err);
                            }
                        },
                        None => {
                            tracing::debug!("Sign-in (offline mode): {email}");
                            session.write().sign_in(offline_profile(&email, None));
                        }
                    }
                }
                BackendAction::SignUp {
                    email,
                    password,
                    full_name,
                } => {
                    session.write().pending = true;
                    match BackendClient::from_env() {
                        Some(client) => {
                            match client.sign_up(&email, &password, &full_name).await {
                                Ok(profile) => session.write().sign_in(profile),
                                Err(err) => {
                                    tracing::error!("Sign-up failed: {err}");
                                    let mut state = session.write();
                                    state.pending = false;
                                    state.last_error = Some(err);
                                }
                            }
                        }
                        None => {
                            tracing::debug!("Sign-up (offline mode): {email}");
                            session
                                .write()
                                .sign_in(offline_profile(&email, Some(full_name)));
                        }
                    }
                }
                BackendAction::SignOut => {
                    session.write().sign_out();
                }
            }
        }
    });
}

/// Local stand-in profile for builds without a configured backend.
fn offline_profile(email: &str, full_name: Option<String>) -> Profile {
    let fallback = email.split('@').next().unwrap_or(email).to_string();
    Profile {
        full_name: full_name.filter(|n| !n.trim().is_empty()).unwrap_or(fallback),
        email: email.to_string(),
        is_admin: false,
    }
}

// ─── HTTP helpers (WASM) ─────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn post_json(base_url: &str, path: &str, body: &str) -> Result<String, String> {
    fetch_json(&format!("{base_url}{path}"), "POST", Some(body.to_string())).await
}

#[cfg(target_family = "wasm")]
async fn get_json(base_url: &str, path: &str) -> Result<String, String> {
    fetch_json(&format!("{base_url}{path}"), "GET", None).await
}

/// Raw fetch wrapper shared with the other remote collaborators.
#[cfg(target_family = "wasm")]
pub(crate) async fn fetch_json(
    url: &str,
    method: &str,
    body: Option<String>,
) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_mode(web_sys::RequestMode::Cors);

    if let Some(b) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&b));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to create request: {e:?}"))?;

    if method == "POST" {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("Failed to set header: {e:?}"))?;
    }

    let window = web_sys::window().ok_or("No window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {e:?}"))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "Response is not a Response object".to_string())?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| format!("Failed to get text: {e:?}"))?,
    )
    .await
    .map_err(|e| format!("Failed to read body: {e:?}"))?;

    let text_str = text
        .as_string()
        .ok_or("Response body is not a string".to_string())?;

    let status = resp.status();
    if status >= 400 {
        return Err(format!("HTTP {status} from {url}: {text_str}"));
    }

    Ok(text_str)
}

// Non-WASM stubs for type checking
#[cfg(not(target_family = "wasm"))]
async fn post_json(_base_url: &str, _path: &str, _body: &str) -> Result<String, String> {
    Err("Backend client only available in WASM".to_string())
}

#[cfg(not(target_family = "wasm"))]
async fn get_json(_base_url: &str, _path: &str) -> Result<String, String> {
    Err("Backend client only available in WASM".to_string())
}

#[cfg(not(target_family = "wasm"))]
pub(crate) async fn fetch_json(
    _url: &str,
    _method: &str,
    _body: Option<String>,
) -> Result<String, String> {
    Err("Backend client only available in WASM".to_string())
}
