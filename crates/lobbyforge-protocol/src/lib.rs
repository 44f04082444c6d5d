//! Wire types for Lobbyforge.
//!
//! This crate defines the "language" that the client and the auction backend
//! speak:
//!
//! - **Identity** ([`UserId`], [`LobbyId`], [`UserProfile`]) — who is acting
//!   and on what.
//! - **Requests** ([`SignupRequest`], [`LoginRequest`], [`CreateLobby`],
//!   [`Bid`]) — the JSON bodies the client sends.
//! - **Responses** ([`AuthResponse`], [`Lobby`], [`LobbySummary`]) — the JSON
//!   bodies the client receives.
//! - **Identity-on-request** ([`UserQuery`]) — caller identity encoded into
//!   query parameters for the lobby endpoints, which don't use bearer tokens.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (HTTP bytes) and the domain
//! clients (auth, lobby, users). It doesn't know about deadlines, base URLs,
//! or sessions — it only knows what travels on the wire and how it is named
//! there (camelCase, per the backend's contract).
//!
//! ```text
//! Transport (HTTP) → Protocol (typed bodies) → Clients (operations)
//! ```

mod identity;
mod types;

pub use identity::UserQuery;
pub use types::{
    AuthResponse, Bid, CreateLobby, Lobby, LobbyId, LobbySummary,
    LoginRequest, SignupRequest, UserId, UserProfile,
};
