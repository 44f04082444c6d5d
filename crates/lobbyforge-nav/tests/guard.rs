//! Tests for the navigation guard's rule table and loop freedom.

use lobbyforge_nav::{evaluate, RouteDecision, HOME_PATH, LOGIN_PATH};
use lobbyforge_protocol::{UserId, UserProfile};
use lobbyforge_session::SessionStore;

fn logged_in() -> SessionStore {
    let mut store = SessionStore::new();
    store.set_session(
        UserProfile {
            id: UserId::from("u-1"),
            username: "otto".to_string(),
            avatar_url: None,
            credits: 0,
        },
        "tok".to_string(),
    );
    store
}

#[test]
fn test_evaluate_login_while_logged_in_redirects_home() {
    let mut store = logged_in();
    assert_eq!(
        evaluate(&mut store, LOGIN_PATH),
        RouteDecision::Redirect(HOME_PATH)
    );
}

#[test]
fn test_evaluate_login_while_logged_out_allows() {
    let mut store = SessionStore::new();
    assert_eq!(evaluate(&mut store, LOGIN_PATH), RouteDecision::Allow);
}

#[test]
fn test_evaluate_anything_while_logged_in_allows() {
    let mut store = logged_in();
    assert_eq!(evaluate(&mut store, "/anything"), RouteDecision::Allow);
    assert_eq!(evaluate(&mut store, HOME_PATH), RouteDecision::Allow);
    assert_eq!(evaluate(&mut store, "/lobbies/l-1"), RouteDecision::Allow);
}

#[test]
fn test_evaluate_anything_while_logged_out_redirects_login() {
    let mut store = SessionStore::new();
    assert_eq!(
        evaluate(&mut store, "/anything"),
        RouteDecision::Redirect(LOGIN_PATH)
    );
    assert_eq!(
        evaluate(&mut store, HOME_PATH),
        RouteDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn test_evaluate_redirect_targets_are_terminal() {
    // Re-evaluating a redirect's own target must always allow, so the
    // guard can never chain redirects.
    let mut out = SessionStore::new();
    if let RouteDecision::Redirect(target) = evaluate(&mut out, "/lobbies/l-1") {
        assert_eq!(evaluate(&mut out, target), RouteDecision::Allow);
    } else {
        panic!("expected a redirect while logged out");
    }

    let mut inn = logged_in();
    if let RouteDecision::Redirect(target) = evaluate(&mut inn, LOGIN_PATH) {
        assert_eq!(evaluate(&mut inn, target), RouteDecision::Allow);
    } else {
        panic!("expected a redirect away from /login while logged in");
    }
}

#[test]
fn test_evaluate_survives_fresh_store_after_logout() {
    // Hard-reload simulation: logout, then a fresh evaluation must
    // re-derive LoggedOut via restore_session without faulting.
    let mut store = logged_in();
    store.logout();
    assert_eq!(
        evaluate(&mut store, "/lobbies/l-1"),
        RouteDecision::Redirect(LOGIN_PATH)
    );
    assert_eq!(evaluate(&mut store, LOGIN_PATH), RouteDecision::Allow);
}
