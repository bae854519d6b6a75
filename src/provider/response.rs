//! Classification of raw provider responses.
//!
//! | Response                                   | Result                  |
//! |--------------------------------------------|-------------------------|
//! | any status, body mentions "no cards found" | `NoMatches`             |
//! | 404                                        | `NoMatches`             |
//! | 2xx, JSON array (or empty / `null`)        | `Cards(..)`             |
//! | 2xx, anything else                         | `MalformedBody` error   |
//! | other status                               | `Status` error          |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cards::{normalize_cards, Card};
use crate::error::ProviderError;

/// Case-insensitive marker the provider puts in "nothing matched" bodies.
pub const NO_CARDS_MARKER: &str = "no cards found";

/// Status and body text as received from the transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn has_no_cards_marker(&self) -> bool {
        self.body.to_lowercase().contains(NO_CARDS_MARKER)
    }
}

/// What a successful provider exchange produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderOutcome {
    /// Normalized cards. May be empty if the provider sent `[]` or nothing.
    Cards(Vec<Card>),
    /// The provider found nothing for the selection.
    NoMatches,
}

impl ProviderOutcome {
    /// True for `NoMatches` and for an empty card list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ProviderOutcome::Cards(cards) => cards.is_empty(),
            ProviderOutcome::NoMatches => true,
        }
    }
}

/// Classify one response.
pub fn classify_response(response: &RawResponse) -> Result<ProviderOutcome, ProviderError> {
    if response.has_no_cards_marker() || response.status == 404 {
        return Ok(ProviderOutcome::NoMatches);
    }

    if !response.is_success() {
        return Err(ProviderError::Status {
            status: response.status,
            message: error_message(response),
        });
    }

    let text = response.body.trim();
    if text.is_empty() {
        return Ok(ProviderOutcome::Cards(Vec::new()));
    }
    let body: Value =
        serde_json::from_str(text).map_err(|e| ProviderError::MalformedBody(e.to_string()))?;
    normalize_cards(body).map(ProviderOutcome::Cards)
}

/// Best human-readable message from a failed response.
///
/// Prefers a JSON `message`, then `error`, then the raw text, then
/// `HTTP <status>`.
#[must_use]
pub fn error_message(response: &RawResponse) -> String {
    let text = response.body.trim();
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", response.status)),
        Ok(Value::String(s)) if !s.trim().is_empty() => s,
        Ok(_) => format!("HTTP {}", response.status),
        Err(_) if !text.is_empty() => text.to_string(),
        Err(_) => format!("HTTP {}", response.status),
    }
}
