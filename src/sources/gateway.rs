//! Outbound HTTP gateway: timeouts, failure classification, and API health tracking.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::state::session::{Notice, SessionAction, SessionState};
use crate::util::{now_local, redact};

/// Why an outbound call produced no usable data.
///
/// Every variant is recoverable: callers treat it as "no data available".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiFailure {
    /// The request did not complete within the allowed time.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// Connection, DNS, TLS, or other transport problem.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// The body could not be decoded as JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(String),
    /// The JSON parsed but lacks a field the caller needs.
    #[error("response is missing field `{0}`")]
    MissingField(&'static str),
}

/// Shared HTTP client wrapper used for every API and asset request.
#[derive(Clone, Debug)]
pub struct Gateway {
    /// Pooled client.
    client: reqwest::Client,
    /// Secret masked out of logged URLs.
    secret: String,
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway {
    /// What: Build a gateway with a crate-identifying user agent.
    ///
    /// Details:
    /// - Falls back to a default client if the builder fails (e.g. no TLS backend).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .user_agent(format!("fxdash/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            secret: String::new(),
        }
    }

    /// Mask `secret` (typically the API key) whenever a URL is logged.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// What: Perform a GET request and update the session's API health.
    ///
    /// Inputs:
    /// - `session`: Session state whose error counter and last-call time are updated.
    /// - `url`: Absolute URL to fetch.
    /// - `timeout`: Total time allowed for the request.
    ///
    /// Output:
    /// - Parsed JSON on success; `ApiFailure` otherwise.
    ///
    /// # Errors
    /// - `Timeout`, `Network`, `Status`, or `Decode` when the call fails.
    ///
    /// Details:
    /// - Success resets the error counter and records the call time.
    /// - Failure increments the counter; crossing the warning threshold is logged and
    ///   surfaced through the session state. Calls are never blocked.
    /// - No retry is attempted.
    pub async fn call(
        &self,
        session: &mut SessionState,
        url: &str,
        timeout: Duration,
    ) -> Result<Value, ApiFailure> {
        let shown = redact(url, &self.secret);
        match self.fetch_json(url, timeout).await {
            Ok(v) => {
                session.dispatch(SessionAction::ApiCallSucceeded { at: now_local() });
                debug!(url = %shown, "api call succeeded");
                Ok(v)
            }
            Err(e) => {
                let notice = session.dispatch(SessionAction::ApiCallFailed);
                warn!(
                    url = %shown,
                    error = %e,
                    error_count = session.api.error_count,
                    "api call failed"
                );
                if notice == Some(Notice::ApiLimitReached) {
                    warn!(
                        error_count = session.api.error_count,
                        "api error threshold exceeded; serving cached data where available"
                    );
                }
                Err(e)
            }
        }
    }

    /// What: Fetch a URL and decode its body as JSON, without touching session state.
    ///
    /// # Errors
    /// - Any transport, status, or decoding failure as an `ApiFailure`.
    async fn fetch_json(&self, url: &str, timeout: Duration) -> Result<Value, ApiFailure> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e, timeout))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiFailure::Status(status.as_u16()));
        }
        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                ApiFailure::Timeout(timeout)
            } else {
                ApiFailure::Decode(e.to_string())
            }
        })
    }
}

/// Map a transport-level `reqwest` error onto the failure taxonomy.
fn classify_transport_error(e: &reqwest::Error, timeout: Duration) -> ApiFailure {
    if e.is_timeout() {
        ApiFailure::Timeout(timeout)
    } else if let Some(status) = e.status() {
        ApiFailure::Status(status.as_u16())
    } else {
        ApiFailure::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    /// What: A refused connection counts as a failure and increments the counter.
    ///
    /// Inputs:
    /// - URL pointing at a closed local port.
    ///
    /// Output:
    /// - `Err(Network | Timeout)`; error counter goes 0 -> 1 -> 2; last call stays unset.
    async fn gateway_failure_increments_error_count() {
        let gw = Gateway::new();
        let mut session = SessionState::default();
        let url = "http://127.0.0.1:9/unreachable";
        let first = gw.call(&mut session, url, Duration::from_millis(500)).await;
        assert!(matches!(
            first,
            Err(ApiFailure::Network(_) | ApiFailure::Timeout(_))
        ));
        assert_eq!(session.api.error_count, 1);
        let _ = gw.call(&mut session, url, Duration::from_millis(500)).await;
        assert_eq!(session.api.error_count, 2);
        assert!(session.api.last_call.is_none());
    }
}
