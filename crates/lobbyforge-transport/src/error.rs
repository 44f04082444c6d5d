//! Error taxonomy for the request executor.
//!
//! Each crate in Lobbyforge defines its own error enum. This one is the
//! canonical classification of everything that can go wrong between
//! issuing an HTTP request and handing back typed data. The executor
//! never panics for any of these — they are all ordinary return values.

/// A classified network-call failure.
///
/// Every fault a caller can reasonably handle lands in exactly one of
/// these four variants. Anything outside them (a programmer error, a
/// poisoned invariant) is a defect to fix, not a case to match on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The deadline elapsed before the response settled. The in-flight
    /// request was aborted. The display text is load-bearing: callers
    /// render it verbatim.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    ///
    /// `message` is taken from a `message` field in the response body when
    /// the body parses as JSON, falling back to the status line's canonical
    /// reason. Callers show it to the user as-is.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never produced a response — DNS failure, connection
    /// refused, broken pipe. Carries the stringified cause.
    #[error("network error: {0}")]
    Network(String),

    /// The server said 2xx but the body wasn't the JSON we expected.
    /// Carries the original body text so nothing is lost for debugging.
    #[error("unparseable response body: {0}")]
    Parse(String),
}

impl RequestError {
    /// Returns the HTTP status code, if this failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_displays_exact_message() {
        assert_eq!(RequestError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_http_displays_server_message() {
        let err = RequestError::Http {
            status: 401,
            message: "bad password".to_string(),
        };
        assert_eq!(err.to_string(), "bad password");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_non_http_variants_have_no_status() {
        assert_eq!(RequestError::Timeout.status(), None);
        assert_eq!(RequestError::Network("dns".into()).status(), None);
        assert_eq!(RequestError::Parse("<html>".into()).status(), None);
    }
}
