//! End-to-end demo: log in, browse lobbies, optionally place a bid.
//!
//! Usage:
//!   LOBBYFORGE_API_BASE_URL=https://api.example.com \
//!     auction-cli <username> <password> [team_index role amount]
//!
//! Exercises the whole stack the way a page would: auth client → session
//! store → navigation guard → lobby client (with a cancellation token on
//! the detail fetch).

use lobbyforge::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (username, password) = match args.as_slice() {
        [u, p, ..] => (u.clone(), p.clone()),
        _ => {
            eprintln!("usage: auction-cli <username> <password> [team_index role amount]");
            std::process::exit(2);
        }
    };

    let config = ClientConfig::from_env()?;
    let auth = AuthClient::new(&config);
    let lobbies = LobbyClient::new(&config);
    let mut session = SessionStore::new();

    // Before login the guard bounces us to the login surface.
    match evaluate(&mut session, HOME_PATH) {
        RouteDecision::Redirect(target) => {
            tracing::info!(target, "not logged in, guard redirects")
        }
        RouteDecision::Allow => tracing::warn!("guard allowed home before login"),
    }

    let resp = auth.login(&username, &hash_password(&password)).await?;
    let (profile, token) = match (resp.profile(), resp.access_token.clone()) {
        (Some(profile), Some(token)) => (profile, token),
        _ => {
            let reason = resp.message.unwrap_or_else(|| "login rejected".into());
            tracing::error!(%reason, "login failed");
            std::process::exit(1);
        }
    };
    // The lobby endpoints want this identity as query parameters.
    let identity = UserQuery::from(&profile);
    session.set_session(profile, token);
    tracing::info!(
        user = session.display_name(),
        credits = session.credits(),
        "logged in"
    );
    match evaluate(&mut session, HOME_PATH) {
        RouteDecision::Allow => tracing::info!("guard allows home"),
        RouteDecision::Redirect(target) => {
            tracing::warn!(target, "guard still redirecting after login")
        }
    }

    let listing = lobbies.lobbies().await;
    tracing::info!(count = listing.len(), "lobby listing fetched");
    let Some(first) = listing.first() else {
        tracing::info!("no lobbies to browse, done");
        return Ok(());
    };

    let cancel = CancellationToken::new();
    match lobbies.lobby(&first.id, &identity, Some(&cancel)).await {
        Some(lobby) => {
            tracing::info!(id = %lobby.id, name = %lobby.tournament_name, "lobby detail")
        }
        None => tracing::warn!(id = %first.id, "lobby detail unavailable"),
    }

    if let [_, _, team, role, amount] = args.as_slice() {
        let bid = Bid {
            team_index: team.parse()?,
            role: role.clone(),
            amount: amount.parse()?,
        };
        match lobbies.place_bid(&first.id, &bid, &identity).await {
            Ok(lobby) => tracing::info!(id = %lobby.id, "bid placed"),
            // The server's message is meant for the user verbatim.
            Err(error) => tracing::error!(%error, "bid rejected"),
        }
    }

    Ok(())
}
