//! The executor: issues HTTP requests with a deadline and normalizes every
//! outcome into [`Outcome`].

use std::time::Duration;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{Outcome, RequestError};

/// Default deadline for a single request. Matches the backend gateway's
/// worst-case cold-start latency with room to spare.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues HTTP requests with a bounded lifetime.
///
/// Cheap to clone — `reqwest::Client` is an `Arc` around a connection pool,
/// so every domain client can hold its own copy.
///
/// The executor is stateless with respect to the application: it knows
/// nothing about sessions, base URLs, or endpoints. Callers hand it a fully
/// built [`Url`] and an optional body; it hands back an [`Outcome`].
#[derive(Debug, Clone)]
pub struct Executor {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor {
    /// Creates an executor with the default 30-second deadline.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the deadline applied to every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured per-request deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `GET url`, decoded as `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Outcome<T> {
        tracing::trace!(%url, "GET");
        self.run(self.client.get(url)).await
    }

    /// `POST url` with a JSON body, decoded as `T`.
    pub async fn post<T, B>(&self, url: Url, body: &B) -> Outcome<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::trace!(%url, "POST");
        self.run(self.client.post(url).json(body)).await
    }

    /// `POST url` with no body, decoded as `T`. Used by the sync-trigger
    /// endpoints, which take everything from the path.
    pub async fn post_empty<T: DeserializeOwned>(&self, url: Url) -> Outcome<T> {
        tracing::trace!(%url, "POST (empty body)");
        self.run(self.client.post(url)).await
    }

    /// `GET url`, abortable by the caller.
    ///
    /// Returns `None` when `cancel` fires before the request settles; the
    /// in-flight request is dropped, so a late response is never observed.
    /// This is the guard against a superseded fetch racing its replacement:
    /// whoever issues the new request cancels the old token first.
    ///
    /// `biased` makes the cancellation arm win when the token was already
    /// cancelled before we got here — the request is then never dispatched.
    pub async fn get_cancellable<T: DeserializeOwned>(
        &self,
        url: Url,
        cancel: &CancellationToken,
    ) -> Option<Outcome<T>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(%url, "request aborted by caller");
                None
            }
            outcome = self.get(url.clone()) => Some(outcome),
        }
    }

    /// Applies the deadline and runs the request to settlement.
    ///
    /// When the timer fires first, the `settle` future is dropped, which
    /// aborts the underlying connection. Either way the timer itself is a
    /// future that ends here — success, failure, or timeout, nothing
    /// outlives this call.
    async fn run<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Outcome<T> {
        match tokio::time::timeout(self.timeout, settle(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(RequestError::Timeout),
        }
    }
}

/// Drives one request to completion and classifies the result.
async fn settle<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Outcome<T> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return Err(RequestError::Timeout),
        Err(e) => return Err(RequestError::Network(e.to_string())),
    };

    let status = response.status();

    // Read as text first. Error bodies are frequently not JSON (HTML from a
    // gateway, plain text from a proxy), and we want the original text in
    // Parse errors rather than a serde message about character 0.
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return Err(RequestError::Network(e.to_string())),
    };

    if !status.is_success() {
        let message = error_message(status, &text);
        tracing::debug!(status = status.as_u16(), %message, "request failed");
        return Err(RequestError::Http {
            status: status.as_u16(),
            message,
        });
    }

    // A handful of write endpoints reply 200 with an empty body; decode
    // that as JSON null so `Outcome<serde_json::Value>` callers get `null`
    // instead of a Parse error.
    if text.trim().is_empty() {
        return serde_json::from_str("null")
            .map_err(|_| RequestError::Parse(text));
    }

    serde_json::from_str(&text).map_err(|_| RequestError::Parse(text))
}

/// Picks the user-facing message for a non-2xx response.
///
/// Preference order: the body's JSON `message` field, then the raw body
/// text when it isn't JSON, then the status line's canonical reason.
fn error_message(status: StatusCode, text: &str) -> String {
    let from_body = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        Err(_) if !text.is_empty() => Some(text.to_string()),
        Err(_) => None,
    };

    from_body.filter(|m| !m.is_empty()).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_body_message_field() {
        let msg =
            error_message(StatusCode::UNAUTHORIZED, r#"{"message":"bad password"}"#);
        assert_eq!(msg, "bad password");
    }

    #[test]
    fn test_error_message_uses_raw_text_when_not_json() {
        let msg = error_message(StatusCode::BAD_GATEWAY, "upstream exploded");
        assert_eq!(msg, "upstream exploded");
    }

    #[test]
    fn test_error_message_falls_back_to_canonical_reason() {
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
        // JSON body without a message field also falls through.
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, r#"{"error":"nope"}"#),
            "Not Found"
        );
    }

    #[test]
    fn test_error_message_ignores_empty_message_field() {
        let msg = error_message(StatusCode::FORBIDDEN, r#"{"message":""}"#);
        assert_eq!(msg, "Forbidden");
    }

    #[test]
    fn test_executor_default_timeout_is_thirty_seconds() {
        assert_eq!(Executor::new().timeout(), Duration::from_secs(30));
        assert_eq!(
            Executor::new()
                .with_timeout(Duration::from_millis(50))
                .timeout(),
            Duration::from_millis(50)
        );
    }
}
