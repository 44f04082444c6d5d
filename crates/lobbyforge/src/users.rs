//! Users client: profile reads and Riot-data sync triggers.
//!
//! All operations here propagate failures — the profile page decides how
//! to render them. Payload shapes are owned by the profile service and
//! evolve independently of this client, so responses come back as raw
//! `serde_json::Value` passthrough rather than structs we'd have to keep
//! in lockstep.

use lobbyforge_protocol::UserId;
use lobbyforge_transport::{Executor, Outcome};
use serde_json::Value;
use url::Url;

use crate::config::{endpoint, ClientConfig};

/// Typed façade over the `/users/{id}` profile endpoints.
#[derive(Debug, Clone)]
pub struct UsersClient {
    executor: Executor,
    base: Url,
}

impl UsersClient {
    /// Creates a client bound to the config's base URL and deadline.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            executor: Executor::new().with_timeout(config.timeout()),
            base: config.api_base(),
        }
    }

    /// `GET /users/{id}` — the account record.
    pub async fn user(&self, id: &UserId) -> Outcome<Value> {
        self.executor.get(self.user_endpoint(id, &[])).await
    }

    /// `GET /users/{id}/profile-full[?matches=][&mastery=]` — the combined
    /// profile payload, optionally bounding how many matches and mastery
    /// entries come back.
    pub async fn profile_full(
        &self,
        id: &UserId,
        matches: Option<u32>,
        mastery: Option<u32>,
    ) -> Outcome<Value> {
        let mut url = self.user_endpoint(id, &["profile-full"]);
        append_count(&mut url, "matches", matches);
        append_count(&mut url, "mastery", mastery);
        self.executor.get(url).await
    }

    /// `GET /users/{id}/riot/profile`.
    pub async fn riot_profile(&self, id: &UserId) -> Outcome<Value> {
        self.executor
            .get(self.user_endpoint(id, &["riot", "profile"]))
            .await
    }

    /// `GET /users/{id}/riot/ranked`.
    pub async fn ranked(&self, id: &UserId) -> Outcome<Value> {
        self.executor
            .get(self.user_endpoint(id, &["riot", "ranked"]))
            .await
    }

    /// `GET /users/{id}/riot/mastery[?top=]`.
    pub async fn mastery(&self, id: &UserId, top: Option<u32>) -> Outcome<Value> {
        let mut url = self.user_endpoint(id, &["riot", "mastery"]);
        append_count(&mut url, "top", top);
        self.executor.get(url).await
    }

    /// `GET /users/{id}/riot/matches[?count=]`.
    pub async fn matches(&self, id: &UserId, count: Option<u32>) -> Outcome<Value> {
        let mut url = self.user_endpoint(id, &["riot", "matches"]);
        append_count(&mut url, "count", count);
        self.executor.get(url).await
    }

    /// `POST /users/{id}/riot/sync` — full resync from the Riot API.
    pub async fn sync(&self, id: &UserId) -> Outcome<Value> {
        self.executor
            .post_empty(self.user_endpoint(id, &["riot", "sync"]))
            .await
    }

    /// `POST /users/{id}/riot/sync-ranked`.
    pub async fn sync_ranked(&self, id: &UserId) -> Outcome<Value> {
        self.executor
            .post_empty(self.user_endpoint(id, &["riot", "sync-ranked"]))
            .await
    }

    /// `POST /users/{id}/riot/sync-mastery`.
    pub async fn sync_mastery(&self, id: &UserId) -> Outcome<Value> {
        self.executor
            .post_empty(self.user_endpoint(id, &["riot", "sync-mastery"]))
            .await
    }

    /// `POST /users/{id}/riot/sync-matches`.
    pub async fn sync_matches(&self, id: &UserId) -> Outcome<Value> {
        self.executor
            .post_empty(self.user_endpoint(id, &["riot", "sync-matches"]))
            .await
    }

    fn user_endpoint(&self, id: &UserId, tail: &[&str]) -> Url {
        let mut segments = vec!["users", id.0.as_str()];
        segments.extend_from_slice(tail);
        endpoint(&self.base, &segments)
    }
}

/// Appends `key=n` only when the value is present AND non-zero.
///
/// Zero is treated as "not provided" — a compatibility quirk inherited from
/// the existing backend callers, where 0 and unset were never
/// distinguishable. Keep until the backend owners say zero should mean
/// "zero".
fn append_count(url: &mut Url, key: &str, value: Option<u32>) {
    if let Some(n) = value.filter(|n| *n != 0) {
        url.query_pairs_mut().append_pair(key, &n.to_string());
    }
}
