//! Identity-on-request encoding for the lobby endpoints.
//!
//! The lobby subsystem doesn't use bearer tokens. Instead, the caller's
//! identity rides along as URL query parameters on every lobby read and
//! write. This module owns that encoding so the clients can't get it
//! subtly wrong (missing percent-encoding, empty `avatarUrl`, etc.).

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{UserId, UserProfile};

/// Caller identity attached to lobby requests as query parameters.
///
/// Encodes as `?userId=...&displayName=...[&avatarUrl=...]`. The avatar
/// parameter is omitted entirely when absent — the backend treats a present
/// empty string differently from a missing key, so we never send one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: UserId,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl UserQuery {
    /// Appends the identity parameters to `url`.
    ///
    /// `query_pairs_mut` percent-encodes values, so display names with
    /// spaces or non-ASCII characters are safe.
    pub fn apply_to(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("userId", &self.user_id.0);
        pairs.append_pair("displayName", &self.display_name);
        // An empty string counts as absent too: some backends hand back
        // `"avatarUrl": ""` for users without one, and that must not turn
        // into a present-but-empty key.
        if let Some(avatar) = self.avatar_url.as_deref().filter(|a| !a.is_empty()) {
            pairs.append_pair("avatarUrl", avatar);
        }
    }
}

/// A profile is exactly the identity the lobby endpoints want, so the
/// conversion is mechanical.
impl From<&UserProfile> for UserQuery {
    fn from(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.id.clone(),
            display_name: profile.username.clone(),
            avatar_url: profile.avatar_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.example.com/lobbies/l-1").unwrap()
    }

    #[test]
    fn test_apply_to_with_avatar_sets_three_params() {
        let mut url = base();
        UserQuery {
            user_id: UserId::from("u-1"),
            display_name: "otto".to_string(),
            avatar_url: Some("https://cdn.example.com/a.png".to_string()),
        }
        .apply_to(&mut url);

        let query = url.query().unwrap();
        assert!(query.contains("userId=u-1"));
        assert!(query.contains("displayName=otto"));
        assert!(query.contains("avatarUrl="));
    }

    #[test]
    fn test_apply_to_without_avatar_omits_key_entirely() {
        let mut url = base();
        UserQuery {
            user_id: UserId::from("u-1"),
            display_name: "otto".to_string(),
            avatar_url: None,
        }
        .apply_to(&mut url);

        assert!(!url.query().unwrap().contains("avatarUrl"));
    }

    #[test]
    fn test_apply_to_empty_string_avatar_omits_key_entirely() {
        let mut url = base();
        UserQuery {
            user_id: UserId::from("u-1"),
            display_name: "otto".to_string(),
            avatar_url: Some(String::new()),
        }
        .apply_to(&mut url);

        assert_eq!(url.query(), Some("userId=u-1&displayName=otto"));
    }

    #[test]
    fn test_apply_to_percent_encodes_display_name() {
        let mut url = base();
        UserQuery {
            user_id: UserId::from("u-1"),
            display_name: "Otto the Great".to_string(),
            avatar_url: None,
        }
        .apply_to(&mut url);

        assert!(url.query().unwrap().contains("displayName=Otto+the+Great"));
    }

    #[test]
    fn test_from_profile_carries_identity_over() {
        let profile = UserProfile {
            id: UserId::from("u-9"),
            username: "otto".to_string(),
            avatar_url: None,
            credits: 100,
        };
        let query = UserQuery::from(&profile);
        assert_eq!(query.user_id, UserId::from("u-9"));
        assert_eq!(query.display_name, "otto");
        assert_eq!(query.avatar_url, None);
    }
}
