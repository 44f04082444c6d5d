//! Client session state for Lobbyforge.
//!
//! This crate owns exactly one piece of cross-component mutable state: who,
//! if anyone, is currently logged in. Everything else in the client is
//! stateless with respect to identity and asks this store.
//!
//! # How it fits in the stack
//!
//! ```text
//! Navigation guard (above)  ← gates route transitions on session state
//!     ↕
//! Session store (this crate)  ← holds identity + token, narrow mutation API
//!     ↕
//! Protocol layer (below)  ← provides the UserProfile type
//! ```

mod store;

pub use store::{SessionStore, DEFAULT_DISPLAY_NAME, FALLBACK_AVATAR_URL};
