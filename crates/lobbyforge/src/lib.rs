//! # Lobbyforge
//!
//! Session and request coordination layer for the auction lobby client.
//!
//! Lobbyforge is the non-visual core of a multiplayer auction app: pages
//! call the typed domain clients here, the clients call the bounded request
//! executor, results flow back as typed outcomes, and the session store and
//! navigation guard keep authentication state coherent across it all.
//!
//! ## Layers
//!
//! ```text
//! pages / UI (out of scope)
//!     │
//!     ▼
//! domain clients (this crate) — AuthClient, LobbyClient, UsersClient
//!     │                          + SessionStore, navigation guard
//!     ▼
//! lobbyforge-transport — timeout-bounded Executor, Outcome<T>
//!     │
//!     ▼
//! backend HTTP API
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use lobbyforge::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("https://api.example.com")?;
//! let auth = AuthClient::new(&config);
//! let mut session = SessionStore::new();
//!
//! let resp = auth.login("otto", &hash_password("hunter2")).await?;
//! if let (Some(profile), Some(token)) = (resp.profile(), resp.access_token.clone()) {
//!     session.set_session(profile, token);
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod config;
mod error;
mod lobby;
mod users;

pub use auth::{hash_password, AuthClient};
pub use config::{ClientConfig, ConfigError, BASE_URL_ENV, DEV_PROXY_PREFIX};
pub use error::LobbyforgeError;
pub use lobby::LobbyClient;
pub use users::UsersClient;

/// One-stop imports for application code.
pub mod prelude {
    pub use crate::{
        hash_password, AuthClient, ClientConfig, LobbyClient,
        LobbyforgeError, UsersClient,
    };
    pub use lobbyforge_nav::{evaluate, RouteDecision, HOME_PATH, LOGIN_PATH};
    pub use lobbyforge_protocol::{
        AuthResponse, Bid, CreateLobby, Lobby, LobbyId, LobbySummary,
        UserId, UserProfile, UserQuery,
    };
    pub use lobbyforge_session::SessionStore;
    pub use lobbyforge_transport::{
        CancellationToken, Executor, Outcome, RequestError,
    };
}
