//! The session store: the client's single record of who is logged in.
//!
//! This is a state machine with two observable states:
//!
//! ```text
//!   LoggedOut ──(set_session)──→ LoggedIn ──(set_session)──→ LoggedIn
//!       ↑                           │                    (identity replaced)
//!       └─────────(logout)──────────┘
//! ```
//!
//! "LoggedIn" is defined by joint presence: the store is authenticated iff
//! it holds BOTH a user profile AND an access token. Neither field is ever
//! meaningful alone, so the mutation API only lets them change together —
//! `set_session` installs both atomically, `logout` clears both atomically.
//! That makes a half-populated session unrepresentable through the public
//! API.
//!
//! Every operation here is a total function: no input makes the store
//! panic or return an error. Failure handling belongs to the network
//! layers; identity bookkeeping must never be the thing that breaks.

use lobbyforge_protocol::UserProfile;

/// Display name shown while logged out.
pub const DEFAULT_DISPLAY_NAME: &str = "OptimalLulz";

/// Avatar shown when the user has none set.
pub const FALLBACK_AVATAR_URL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSNnrlK75zGyzudA9TsQPHt5Tuz07UP9gbhYg&s";

/// Holds the authenticated identity and its bearer token.
///
/// Fields are private on purpose: no other component may write session
/// state directly. Mutation happens only through the four actions below,
/// and reads only through the derived views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    user: Option<UserProfile>,
    access_token: Option<String>,
}

impl SessionStore {
    /// Creates an empty (logged-out) store. The process starts here.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Actions ----------------------------------------------------------

    /// Installs a new identity and token in one step.
    ///
    /// Transition: LoggedOut → LoggedIn, or LoggedIn → LoggedIn with the
    /// identity replaced. The token's content is not inspected — the trust
    /// boundary is the auth client's response, not this store.
    pub fn set_session(&mut self, user: UserProfile, access_token: String) {
        tracing::info!(user = %user.id, "session established");
        self.user = Some(user);
        self.access_token = Some(access_token);
    }

    /// Updates the credits balance in place.
    ///
    /// A no-op while logged out: there is no balance to update, and callers
    /// racing a logout must not fault.
    pub fn update_credits(&mut self, amount: i64) {
        if let Some(user) = &mut self.user {
            user.credits = amount;
        }
    }

    /// Discards identity and token in one step. Transition to LoggedOut.
    pub fn logout(&mut self) {
        if self.user.is_some() {
            tracing::info!("session cleared");
        }
        self.user = None;
        self.access_token = None;
    }

    /// Rehydrates from durable storage.
    ///
    /// Deliberately a no-op: sessions are not persisted across reloads.
    /// The hook exists so the navigation guard can call it unconditionally
    /// today and a real restore can slot in later. Contract: never faults,
    /// never partially populates, safe to call any number of times.
    pub fn restore_session(&mut self) {}

    // -- Derived views ----------------------------------------------------

    /// True iff both identity and token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    /// The name to display, with a fixed fallback while logged out.
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// The avatar to display, with a fixed placeholder when absent.
    pub fn avatar_url(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.avatar_url.as_deref())
            .unwrap_or(FALLBACK_AVATAR_URL)
    }

    /// The credits balance, 0 while logged out.
    pub fn credits(&self) -> i64 {
        self.user.as_ref().map(|u| u.credits).unwrap_or(0)
    }

    /// Read-only view of the profile, if logged in.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Read-only view of the bearer token, if logged in.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}
