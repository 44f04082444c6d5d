//! Lobby client: browsing lobbies and placing bids.
//!
//! The error policy here is deliberately split, and it is the one piece of
//! this crate that is a product decision rather than plumbing:
//!
//! - **Reads degrade.** An empty lobby list or a missing lobby detail is a
//!   safe thing for the UI to show, so read failures are logged and
//!   converted to empty/absent instead of surfaced.
//! - **Writes propagate.** Losing a create or a bid silently is never
//!   acceptable, so those return the classified failure to the caller.

use lobbyforge_protocol::{Bid, CreateLobby, Lobby, LobbyId, LobbySummary, UserQuery};
use lobbyforge_transport::{CancellationToken, Executor, Outcome};
use url::Url;

use crate::config::{endpoint, ClientConfig};

/// Typed façade over the `/lobbies` endpoints.
///
/// The lobby subsystem uses identity-on-request ([`UserQuery`] in the query
/// string) rather than bearer tokens, so most operations take the caller's
/// identity explicitly.
#[derive(Debug, Clone)]
pub struct LobbyClient {
    executor: Executor,
    base: Url,
}

impl LobbyClient {
    /// Creates a client bound to the config's base URL and deadline.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            executor: Executor::new().with_timeout(config.timeout()),
            base: config.api_base(),
        }
    }

    /// Lists all lobbies. `GET /lobbies`.
    ///
    /// Never faults: any failure is logged and an empty list returned. A
    /// stale or empty listing is a safe default for the UI.
    pub async fn lobbies(&self) -> Vec<LobbySummary> {
        let url = endpoint(&self.base, &["lobbies"]);
        match self.executor.get::<Vec<LobbySummary>>(url).await {
            Ok(list) => list,
            Err(error) => {
                tracing::warn!(%error, "lobby listing failed, showing none");
                Vec::new()
            }
        }
    }

    /// Fetches one lobby's detail. `GET /lobbies/{id}?userId&displayName`.
    ///
    /// Returns `None` on failure (logged) or when `cancel` fires first. A
    /// caller that re-queries the same lobby should cancel the previous
    /// token before issuing the new fetch, so a late stale response can
    /// never overwrite a fresher one.
    pub async fn lobby(
        &self,
        id: &LobbyId,
        identity: &UserQuery,
        cancel: Option<&CancellationToken>,
    ) -> Option<Lobby> {
        let mut url = endpoint(&self.base, &["lobbies", &id.0]);
        identity.apply_to(&mut url);

        let outcome = match cancel {
            Some(token) => self.executor.get_cancellable(url, token).await?,
            None => self.executor.get(url).await,
        };

        match outcome {
            Ok(lobby) => Some(lobby),
            Err(error) => {
                tracing::warn!(lobby = %id, %error, "lobby fetch failed");
                None
            }
        }
    }

    /// Creates a new lobby. `POST /lobbies`.
    ///
    /// # Errors
    /// Propagates the classified failure — this is a write.
    pub async fn create_lobby(&self, request: &CreateLobby) -> Outcome<Lobby> {
        self.executor
            .post(endpoint(&self.base, &["lobbies"]), request)
            .await
    }

    /// Places a bid on a team/role slot. `POST /lobbies/{id}/bids?...`.
    ///
    /// The bid body is serialized field-for-field; the server decides
    /// accept/reject/outbid and replies with the updated lobby state.
    ///
    /// # Errors
    /// Propagates the classified failure — a silently lost bid would be
    /// indistinguishable from being outbid.
    pub async fn place_bid(
        &self,
        id: &LobbyId,
        bid: &Bid,
        identity: &UserQuery,
    ) -> Outcome<Lobby> {
        let mut url = endpoint(&self.base, &["lobbies", &id.0, "bids"]);
        identity.apply_to(&mut url);
        self.executor.post(url, bid).await
    }
}
