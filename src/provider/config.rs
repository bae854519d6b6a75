//! Provider endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where to send selection requests and how long to wait.
///
/// The provider has been deployed behind both plain and TLS hosts and with
/// both path casings, so the resolver tries every `base × path` pair in
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub bases: Vec<String>,
    pub paths: Vec<String>,
    #[serde(default = "ProviderConfig::default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ProviderConfig {
    const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    fn default_timeout_ms() -> u64 {
        Self::DEFAULT_TIMEOUT_MS
    }

    /// A single endpoint, no fallback.
    pub fn single(base: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            bases: vec![base.into()],
            paths: vec![path.into()],
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
        }
    }

    /// Add a base URL to try (builder pattern).
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Add a path to try under every base.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Every URL to try, bases outermost.
    #[must_use]
    pub fn endpoints(&self) -> Vec<String> {
        self.bases
            .iter()
            .flat_map(|base| {
                let base = base.trim_end_matches('/');
                self.paths
                    .iter()
                    .map(move |path| format!("{}/{}", base, path.trim_start_matches('/')))
            })
            .collect()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::single("http://lovegame.somee.com/api", "Users/get-selected-cards")
            .with_base("https://lovegame.somee.com/api")
            .with_path("users/get-selected-cards")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_order() {
        let config = ProviderConfig::default();
        assert_eq!(
            config.endpoints(),
            vec![
                "http://lovegame.somee.com/api/Users/get-selected-cards",
                "http://lovegame.somee.com/api/users/get-selected-cards",
                "https://lovegame.somee.com/api/Users/get-selected-cards",
                "https://lovegame.somee.com/api/users/get-selected-cards",
            ]
        );
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_slashes_are_normalized() {
        let config = ProviderConfig::single("http://host/api/", "/cards");
        assert_eq!(config.endpoints(), vec!["http://host/api/cards"]);
    }

    #[test]
    fn test_from_json_defaults_timeout() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"bases":["http://a"],"paths":["p"]}"#).unwrap();
        assert_eq!(config.timeout_ms, 10_000);
        let config = config.with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout_ms, 3_000);
    }
}
