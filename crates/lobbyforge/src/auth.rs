//! Auth client: the signup/login exchange with the auth backend.
//!
//! Stateless façade over the executor. On success the caller feeds the
//! returned profile and token into the session store; this client doesn't
//! touch session state itself.

use lobbyforge_protocol::{AuthResponse, LoginRequest, SignupRequest};
use lobbyforge_transport::{Executor, Outcome};
use sha2::{Digest, Sha256};
use url::Url;

use crate::config::{endpoint, ClientConfig};

/// Typed façade over `POST /auth/signup` and `POST /auth/login`.
#[derive(Debug, Clone)]
pub struct AuthClient {
    executor: Executor,
    base: Url,
}

impl AuthClient {
    /// Creates a client bound to the config's base URL and deadline.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            executor: Executor::new().with_timeout(config.timeout()),
            base: config.api_base(),
        }
    }

    /// Registers a new account.
    ///
    /// `password_hash` must already be digested with [`hash_password`];
    /// this method will not hash for you, so a plaintext slip-up is visible
    /// at the call site.
    ///
    /// # Errors
    /// Propagates the classified failure — auth exchanges are writes and
    /// must never be silently swallowed.
    pub async fn signup(
        &self,
        username: &str,
        email: Option<&str>,
        password_hash: &str,
    ) -> Outcome<AuthResponse> {
        let body = SignupRequest {
            username: username.to_string(),
            email: email.map(str::to_string),
            password_hash: password_hash.to_string(),
        };
        self.executor
            .post(endpoint(&self.base, &["auth", "signup"]), &body)
            .await
    }

    /// Exchanges credentials for an identity and access token.
    ///
    /// # Errors
    /// Propagates the classified failure. A wrong password typically
    /// arrives as `RequestError::Http { status: 401, .. }` with the
    /// backend's message.
    pub async fn login(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Outcome<AuthResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        self.executor
            .post(endpoint(&self.base, &["auth", "login"]), &body)
            .await
    }
}

/// One-way password digest: lowercase hex SHA-256 of the plaintext.
///
/// The backend stores and compares digests; the plaintext never leaves the
/// process. One-way only — there is deliberately no inverse anywhere in
/// this codebase.
pub fn hash_password(plain: &str) -> String {
    let digest = Sha256::digest(plain.as_bytes());
    // `{:02x}`: lowercase hex, zero-padded to 2 digits per byte.
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_matches_known_sha256_vector() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_hash_password_is_lowercase_hex_of_fixed_length() {
        let digest = hash_password("hunter2");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_password_is_deterministic_and_input_sensitive() {
        assert_eq!(hash_password("a"), hash_password("a"));
        assert_ne!(hash_password("a"), hash_password("b"));
    }
}
