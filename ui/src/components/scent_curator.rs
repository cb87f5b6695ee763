//! Client for the AI Fragrance Curator.
//!
//! Asks the generative-language API for a short scent recommendation
//! against a fixed prompt. API key comes from the `GEMINI_API_KEY`
//! compile-time env var; callers fall back to fixed marketing copy when
//! the key is missing or the call fails.

use serde::{Deserialize, Serialize};

use super::backend_api::fetch_json;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const MODEL: &str = "gemini-3-flash-preview";

const CURATOR_PROMPT: &str = "You are a luxury fragrance expert for 'Sillage Atelier'. \
Suggest a unique scent profile for someone who loves the desert, warm evenings, \
and mystery. Keep it poetic and short (2 sentences).";

/// Shown when the model answers with an empty candidate.
pub const EMPTY_ANSWER_COPY: &str =
    "A blend of ancient oud and desert rose awaits your discovery.";

/// Shown when the call fails outright.
pub const FALLBACK_COPY: &str =
    "Discover the timeless elegance of our signature Oud and Rose blends.";

fn api_key() -> Option<String> {
    option_env!("GEMINI_API_KEY")
        .filter(|key| !key.is_empty())
        .map(String::from)
}

// ─── Request/Response types ──────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Curator client. Only functional in WASM builds with an API key set.
pub struct CuratorClient {
    api_key: String,
}

impl CuratorClient {
    /// Create a client from compile-time env vars. Returns None when no
    /// API key is configured.
    pub fn from_env() -> Option<Self> {
        api_key().map(|api_key| Self { api_key })
    }

    /// Ask for a recommendation against the fixed curator prompt.
    pub async fn recommend(&self) -> Result<String, String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: CURATOR_PROMPT.to_string(),
                }],
            }],
        };
        let body = serde_json::to_string(&request).map_err(|e| e.to_string())?;

        let url = format!("{API_BASE}/{MODEL}:generateContent?key={}", self.api_key);
        let resp = fetch_json(&url, "POST", Some(body)).await?;

        let parsed: GenerateResponse =
            serde_json::from_str(&resp).map_err(|e| format!("Parse curator response: {e}"))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(text.unwrap_or_else(|| EMPTY_ANSWER_COPY.to_string()))
    }
}
