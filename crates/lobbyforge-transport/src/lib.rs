//! Timeout-bounded request execution for Lobbyforge.
//!
//! This crate is the only place in the client that talks HTTP and the only
//! place allowed to do timer or cancellation bookkeeping. Everything above
//! it (the auth, lobby, and users clients) builds URLs and bodies, calls
//! the [`Executor`], and gets back an [`Outcome`] — typed data on success,
//! a classified [`RequestError`] on failure. Raw transport faults never
//! escape this crate.
//!
//! # How a call settles
//!
//! ```text
//! deadline fires first          → Err(Timeout)        (in-flight call aborted)
//! connect/DNS fault             → Err(Network)
//! non-2xx response              → Err(Http { status, message })
//! 2xx but body isn't our JSON   → Err(Parse(original text))
//! 2xx with expected JSON        → Ok(data)
//! ```
//!
//! The deadline is a `tokio::time::timeout` future wrapping the whole
//! send-and-read sequence. Dropping that future on any exit path releases
//! the timer and aborts the underlying request, so there is nothing to
//! leak regardless of which way the call settles.

mod error;
mod executor;

pub use error::RequestError;
pub use executor::{Executor, DEFAULT_TIMEOUT};

/// Re-exported so callers that pass a cancellation handle don't need their
/// own `tokio-util` dependency.
pub use tokio_util::sync::CancellationToken;

/// The canonical result of any network call in this client.
pub type Outcome<T> = Result<T, RequestError>;
