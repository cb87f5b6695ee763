/// Read-only view of the current sign-in state.
///
/// The review ledger consults this as its auth precondition; the UI's
/// session state implements it over whatever the auth collaborator
/// returned. Keeping it a trait keeps the core testable without network
/// access.
pub trait SessionAccessor {
    fn is_signed_in(&self) -> bool;

    /// Display name of the signed-in user, if any.
    fn display_name(&self) -> Option<String>;

    fn is_admin(&self) -> bool;
}

/// The always-signed-out session.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestSession;

impl SessionAccessor for GuestSession {
    fn is_signed_in(&self) -> bool {
        false
    }

    fn display_name(&self) -> Option<String> {
        None
    }

    fn is_admin(&self) -> bool {
        false
    }
}
