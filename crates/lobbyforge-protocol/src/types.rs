//! Core wire types for Lobbyforge's JSON contract.
//!
//! Everything in this module gets serialized to JSON, sent over HTTP, and
//! deserialized on the backend (or vice versa). Field names on the wire are
//! camelCase — the backend is JavaScript — so every struct carries
//! `#[serde(rename_all = "camelCase")]` and Rust code keeps snake_case.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a user account.
///
/// This is a "newtype wrapper" around the backend's opaque string id. The
/// wrapper buys us type safety — you can't accidentally pass a `LobbyId`
/// where a `UserId` is expected, even though both are strings underneath.
///
/// `#[serde(transparent)]` makes it serialize as the bare string, not as
/// `{ "0": "..." }`. So `UserId("u-7".into())` is just `"u-7"` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A unique identifier for an auction lobby.
///
/// Same newtype pattern as [`UserId`]. A lobby is one auction instance —
/// one tournament's set of team/role slots being bid on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LobbyId(pub String);

impl fmt::Display for LobbyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LobbyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The authenticated user's profile as the client holds it.
///
/// This is the identity half of a session. The session store pairs it with
/// an access token; neither is meaningful alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Internal account id assigned by the auth backend.
    pub id: UserId,
    /// The user's login / display name.
    pub username: String,
    /// Avatar image URL. `None` when the user never set one — the UI
    /// substitutes a placeholder, not this layer.
    pub avatar_url: Option<String>,
    /// Auction currency balance.
    pub credits: i64,
}

// ---------------------------------------------------------------------------
// Auth exchange
// ---------------------------------------------------------------------------

/// Body of `POST /auth/signup`.
///
/// `password_hash` is the SHA-256 hex digest of the plaintext — the
/// plaintext itself never goes on the wire. `email` serializes as JSON
/// `null` when absent; the backend accepts either.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password_hash: String,
}

/// What the auth backend returns from both signup and login.
///
/// A single shape covers success and failure: on success `ok` is true and
/// the identity fields plus `access_token` are populated; on failure `ok`
/// is false and `message` explains why. Everything optional defaults to
/// `None` so partial responses still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthResponse {
    /// Whether the exchange succeeded.
    pub ok: bool,
    pub id: Option<UserId>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub credits: Option<i64>,
    /// Bearer token for the session. Present only on success.
    pub access_token: Option<String>,
    /// Role discriminator ("User" or "Admin"). Named `type` on the wire,
    /// which is a Rust keyword, hence the rename.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Human-readable failure reason. Present only on failure.
    pub message: Option<String>,
}

impl AuthResponse {
    /// Folds the response into a [`UserProfile`].
    ///
    /// Returns `None` unless the exchange succeeded (`ok`) AND the response
    /// carries a complete identity — a failure response that happens to echo
    /// an id must not produce a usable profile.
    pub fn profile(&self) -> Option<UserProfile> {
        if !self.ok {
            return None;
        }
        Some(UserProfile {
            id: self.id.clone()?,
            username: self.username.clone()?,
            avatar_url: self.avatar_url.clone(),
            credits: self.credits.unwrap_or(0),
        })
    }
}

// ---------------------------------------------------------------------------
// Lobby types
// ---------------------------------------------------------------------------

/// A bid on a team/role slot within a lobby.
///
/// This is an immutable value object: the client builds it, serializes it
/// field-for-field, and sends it. Whether the bid is accepted, rejected, or
/// outbid is decided server-side — the client only transports it and
/// displays the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    /// Which team in the lobby the bid targets (0-based).
    pub team_index: u32,
    /// The role slot being bid on, e.g. "support".
    pub role: String,
    /// The amount of credits offered.
    pub amount: i64,
}

/// Body of `POST /lobbies` — creates a new auction lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLobby {
    pub tournament_name: String,
    /// Scheduled start, ISO-8601. Passed through verbatim; the client does
    /// no date math.
    pub starts_at_iso: String,
}

/// A lobby as returned by the backend.
///
/// Only the fields this client actually reads are typed. Everything else —
/// team rosters, slot states, bid history — is server authority and flows
/// through the flattened `extra` map untouched, so the UI can render it
/// without this crate having to chase the backend's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lobby {
    pub id: LobbyId,
    pub tournament_name: String,
    pub starts_at_iso: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One entry in the `GET /lobbies` listing. Same passthrough scheme as
/// [`Lobby`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbySummary {
    pub id: LobbyId,
    pub tournament_name: String,
    pub starts_at_iso: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_id_serializes_transparent() {
        let id = UserId::from("u-42");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("u-42"));
        assert_eq!(id.to_string(), "u-42");
    }

    #[test]
    fn test_bid_serializes_field_for_field() {
        let bid = Bid {
            team_index: 2,
            role: "support".to_string(),
            amount: 150,
        };
        assert_eq!(
            serde_json::to_value(&bid).unwrap(),
            json!({ "teamIndex": 2, "role": "support", "amount": 150 })
        );
    }

    #[test]
    fn test_create_lobby_uses_camel_case_keys() {
        let req = CreateLobby {
            tournament_name: "Cup".to_string(),
            starts_at_iso: "2025-01-01T00:00:00Z".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "tournamentName": "Cup", "startsAtIso": "2025-01-01T00:00:00Z" })
        );
    }

    #[test]
    fn test_auth_response_reads_type_discriminator() {
        let resp: AuthResponse = serde_json::from_value(json!({
            "ok": true,
            "id": "u-1",
            "username": "otto",
            "credits": 500,
            "accessToken": "tok",
            "type": "Admin"
        }))
        .unwrap();
        assert!(resp.ok);
        assert_eq!(resp.kind.as_deref(), Some("Admin"));
        assert_eq!(resp.access_token.as_deref(), Some("tok"));
        assert!(resp.message.is_none());
    }

    #[test]
    fn test_auth_response_failure_has_no_profile() {
        let resp: AuthResponse = serde_json::from_value(json!({
            "ok": false,
            "message": "bad password"
        }))
        .unwrap();
        assert!(resp.profile().is_none());
        assert_eq!(resp.message.as_deref(), Some("bad password"));
    }

    #[test]
    fn test_auth_response_not_ok_with_identity_has_no_profile() {
        // Even a failure that echoes identity fields must not fold into a
        // usable profile.
        let resp: AuthResponse = serde_json::from_value(json!({
            "ok": false,
            "id": "u-1",
            "username": "otto",
            "credits": 500,
            "message": "account locked"
        }))
        .unwrap();
        assert!(resp.profile().is_none());
    }

    #[test]
    fn test_auth_response_success_folds_into_profile() {
        let resp: AuthResponse = serde_json::from_value(json!({
            "ok": true,
            "id": "u-1",
            "username": "otto",
            "avatarUrl": null,
            "credits": 500,
            "accessToken": "tok"
        }))
        .unwrap();
        let profile = resp.profile().unwrap();
        assert_eq!(profile.id, UserId::from("u-1"));
        assert_eq!(profile.username, "otto");
        assert_eq!(profile.avatar_url, None);
        assert_eq!(profile.credits, 500);
    }

    #[test]
    fn test_lobby_preserves_unknown_fields() {
        let lobby: Lobby = serde_json::from_value(json!({
            "id": "l-1",
            "tournamentName": "Cup",
            "startsAtIso": "2025-01-01T00:00:00Z",
            "teams": [ { "name": "Blue", "slots": 5 } ]
        }))
        .unwrap();
        assert_eq!(lobby.id, LobbyId::from("l-1"));
        assert!(lobby.extra.contains_key("teams"));
        // Round-trips back out with the passthrough fields intact.
        let out = serde_json::to_value(&lobby).unwrap();
        assert_eq!(out["teams"][0]["name"], "Blue");
    }
}
