//! Unified error type for the facade crate.

use lobbyforge_transport::RequestError;

use crate::ConfigError;

/// Top-level error wrapping the layer-specific ones.
///
/// Application code that wires everything together can bubble this single
/// type with `?` instead of importing each layer's error. The `#[from]`
/// attributes generate the conversions.
#[derive(Debug, thiserror::Error)]
pub enum LobbyforgeError {
    /// A classified network-call failure (timeout, HTTP, network, parse).
    #[error(transparent)]
    Transport(#[from] RequestError),

    /// A configuration problem (bad or missing base URL).
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_error() {
        let err = RequestError::Http {
            status: 401,
            message: "bad password".to_string(),
        };
        let top: LobbyforgeError = err.into();
        assert!(matches!(top, LobbyforgeError::Transport(_)));
        assert_eq!(top.to_string(), "bad password");
    }

    #[test]
    fn test_from_config_error() {
        let err = ConfigError::MissingBaseUrl;
        let top: LobbyforgeError = err.into();
        assert!(matches!(top, LobbyforgeError::Config(_)));
        assert!(top.to_string().contains("LOBBYFORGE_API_BASE_URL"));
    }
}
