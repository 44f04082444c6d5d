//! Navigation guard for Lobbyforge.
//!
//! A single predicate evaluated before every route transition. Given the
//! destination path and the session store, it decides: let the navigation
//! through, or redirect.
//!
//! The rule table is small and total:
//!
//! ```text
//! destination   session     decision
//! ───────────   ─────────   ────────────────────
//! /login        LoggedIn    redirect to /
//! /login        LoggedOut   allow
//! anything      LoggedIn    allow
//! anything      LoggedOut   redirect to /login
//! ```
//!
//! # Loop freedom
//!
//! Both redirect targets are terminal under re-evaluation: `/login` while
//! logged out allows, `/` while logged in allows. The guard can therefore
//! never chain more than one redirect, regardless of session state.
//!
//! # Rehydration
//!
//! The guard calls [`SessionStore::restore_session`] before deciding, so a
//! fresh process (a hard reload) re-derives its state deterministically
//! instead of assuming logged-out. Today that restore is a no-op; the call
//! is still made so the behavior doesn't change when it isn't.

use lobbyforge_session::SessionStore;

/// The login surface. Always reachable while logged out.
pub const LOGIN_PATH: &str = "/login";

/// The home surface. Where authenticated users land.
pub const HOME_PATH: &str = "/";

/// The guard's verdict on a single route transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Proceed to the requested destination.
    Allow,
    /// Navigate to the given path instead.
    Redirect(&'static str),
}

/// Evaluates one route transition.
///
/// Aside from the rehydration call this is a pure function of its inputs;
/// it never faults and never surfaces errors — an unguardable path doesn't
/// exist in its domain.
pub fn evaluate(store: &mut SessionStore, destination: &str) -> RouteDecision {
    store.restore_session();

    let authenticated = store.is_authenticated();
    let decision = if destination == LOGIN_PATH {
        if authenticated {
            // Already logged in; the login surface is pointless.
            RouteDecision::Redirect(HOME_PATH)
        } else {
            RouteDecision::Allow
        }
    } else if authenticated {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(LOGIN_PATH)
    };

    tracing::debug!(destination, authenticated, ?decision, "route evaluated");
    decision
}
