use dioxus::prelude::*;

use sillage_common::session::SessionAccessor;

/// Profile of the signed-in user, as returned by the auth collaborator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Auth state shared across all components.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub profile: Option<Profile>,
    pub pending: bool,
    pub last_error: Option<String>,
}

impl SessionState {
    pub fn sign_in(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.pending = false;
        self.last_error = None;
    }

    pub fn sign_out(&mut self) {
        self.profile = None;
        self.pending = false;
    }

    /// First letter of the display name, for the navbar avatar.
    pub fn initial(&self) -> Option<char> {
        let profile = self.profile.as_ref()?;
        profile
            .full_name
            .chars()
            .next()
            .or_else(|| profile.email.chars().next().map(|c| c.to_ascii_uppercase()))
    }
}

impl SessionAccessor for SessionState {
    fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    fn display_name(&self) -> Option<String> {
        self.profile.as_ref().map(|p| p.full_name.clone())
    }

    fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.is_admin)
    }
}

/// Provide SessionState as shared context at the top of the app.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}
