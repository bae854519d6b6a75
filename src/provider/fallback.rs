//! Provider traits and the endpoint-fallback implementation.
//!
//! `Transport` is the one seam where real networking plugs in; the crate
//! ships no HTTP client. `FallbackProvider` walks the configured endpoints
//! and folds every attempt into a single outcome for the caller.

use std::time::Duration;

use tracing::{debug, warn};

use super::config::ProviderConfig;
use super::response::{classify_response, ProviderOutcome, RawResponse};
use crate::error::ProviderError;
use crate::selection::SelectionRequest;

/// Sends one JSON POST and returns whatever came back.
///
/// Connection failures and timeouts are `ProviderError::Transport`; any
/// HTTP response, whatever its status, is `Ok`.
pub trait Transport {
    fn post_json(&self, url: &str, body: &str, timeout: Duration) -> Result<RawResponse, ProviderError>;
}

/// Anything that can turn a selection into cards.
pub trait CardProvider {
    fn fetch_cards(&self, request: &SelectionRequest) -> Result<ProviderOutcome, ProviderError>;
}

/// Tries each configured endpoint until one gives a definite answer.
///
/// - Cards, a 404, or a "no cards found" body: returned at once. A 404 is
///   `NoMatches`, the same as the marker.
/// - Transport or other failures: remembered, next endpoint tried.
///
/// If every endpoint fails, the last error is returned.
#[derive(Clone, Debug)]
pub struct FallbackProvider<T> {
    config: ProviderConfig,
    transport: T,
}

impl<T: Transport> FallbackProvider<T> {
    pub fn new(config: ProviderConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> CardProvider for FallbackProvider<T> {
    fn fetch_cards(&self, request: &SelectionRequest) -> Result<ProviderOutcome, ProviderError> {
        let body = request
            .to_json()
            .map_err(|e| ProviderError::MalformedBody(e.to_string()))?;
        let timeout = self.config.timeout();

        let mut last_error = None;

        for url in self.config.endpoints() {
            debug!(%url, selections = request.selections().len(), "requesting cards");

            let response = match self.transport.post_json(&url, &body, timeout) {
                Ok(response) => response,
                Err(err) => {
                    warn!(%url, error = %err, "provider endpoint unreachable");
                    last_error = Some(err);
                    continue;
                }
            };

            match classify_response(&response) {
                Ok(outcome) => {
                    debug!(%url, status = response.status, empty = outcome.is_empty(), "provider answered");
                    return Ok(outcome);
                }
                Err(err) => {
                    warn!(%url, error = %err, "provider endpoint failed");
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or(ProviderError::Unreachable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CategoryId, LevelId, ModeId};
    use crate::selection::SelectionCriterion;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Replays canned results and records every URL hit.
    struct Scripted {
        replies: Mutex<VecDeque<Result<RawResponse, ProviderError>>>,
        hits: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<RawResponse, ProviderError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                hits: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for Scripted {
        fn post_json(&self, url: &str, _body: &str, _timeout: Duration) -> Result<RawResponse, ProviderError> {
            self.hits.lock().push(url.to_string());
            self.replies
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(ProviderError::Unreachable))
        }
    }

    fn request() -> SelectionRequest {
        SelectionRequest::new(vec![SelectionCriterion {
            mode: ModeId::new(1),
            category: CategoryId::new(1),
            level: LevelId::new(1).unwrap(),
            count: 5,
        }])
        .unwrap()
    }

    fn transport_err(url: &str) -> Result<RawResponse, ProviderError> {
        Err(ProviderError::Transport {
            url: url.into(),
            message: "timed out".into(),
        })
    }

    #[test]
    fn test_first_success_wins() {
        let provider = FallbackProvider::new(
            ProviderConfig::default(),
            Scripted::new(vec![Ok(RawResponse::new(
                200,
                r#"[{"id":1,"categoryID":1,"levelID":1,"description":"a"}]"#,
            ))]),
        );

        let outcome = provider.fetch_cards(&request()).unwrap();
        assert!(!outcome.is_empty());
        assert_eq!(provider.transport().hits.lock().len(), 1);
    }

    #[test]
    fn test_falls_through_failures_in_order() {
        let provider = FallbackProvider::new(
            ProviderConfig::default(),
            Scripted::new(vec![
                transport_err("a"),
                Ok(RawResponse::new(500, "boom")),
                Ok(RawResponse::new(502, "")),
                Ok(RawResponse::new(200, "[]")),
            ]),
        );

        let outcome = provider.fetch_cards(&request()).unwrap();
        assert_eq!(outcome, ProviderOutcome::Cards(Vec::new()));
        assert_eq!(
            *provider.transport().hits.lock(),
            ProviderConfig::default().endpoints()
        );
    }

    #[test]
    fn test_marker_stops_immediately() {
        let provider = FallbackProvider::new(
            ProviderConfig::default(),
            Scripted::new(vec![Ok(RawResponse::new(200, "No cards found"))]),
        );

        assert_eq!(provider.fetch_cards(&request()).unwrap(), ProviderOutcome::NoMatches);
        assert_eq!(provider.transport().hits.lock().len(), 1);
    }

    #[test]
    fn test_plain_404_stops_before_later_cards() {
        let provider = FallbackProvider::new(
            ProviderConfig::default(),
            Scripted::new(vec![
                Ok(RawResponse::new(404, "")),
                Ok(RawResponse::new(
                    200,
                    r#"[{"id":1,"categoryID":1,"levelID":1,"description":"a"}]"#,
                )),
            ]),
        );

        assert_eq!(provider.fetch_cards(&request()).unwrap(), ProviderOutcome::NoMatches);
        assert_eq!(provider.transport().hits.lock().len(), 1);
    }

    #[test]
    fn test_404_after_failures_is_no_matches() {
        let provider = FallbackProvider::new(
            ProviderConfig::default(),
            Scripted::new(vec![
                transport_err("a"),
                Ok(RawResponse::new(500, "")),
                Ok(RawResponse::new(404, "")),
            ]),
        );

        assert_eq!(provider.fetch_cards(&request()).unwrap(), ProviderOutcome::NoMatches);
        assert_eq!(provider.transport().hits.lock().len(), 3);
    }

    #[test]
    fn test_last_error_surfaces() {
        let provider = FallbackProvider::new(
            ProviderConfig::single("http://only", "cards"),
            Scripted::new(vec![Ok(RawResponse::new(500, r#"{"message":"db down"}"#))]),
        );

        let err = provider.fetch_cards(&request()).unwrap_err();
        assert_eq!(
            err,
            ProviderError::Status {
                status: 500,
                message: "db down".into()
            }
        );
    }

    #[test]
    fn test_no_endpoints_is_unreachable() {
        let config = ProviderConfig {
            bases: Vec::new(),
            paths: vec!["x".into()],
            timeout_ms: 1,
        };
        let provider = FallbackProvider::new(config, Scripted::new(Vec::new()));
        assert_eq!(provider.fetch_cards(&request()).unwrap_err(), ProviderError::Unreachable);
    }
}
