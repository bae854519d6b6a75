//! Card provider boundary.
//!
//! The provider is an external HTTP service. This module owns everything on
//! our side of that contract: endpoint configuration, response
//! classification, and the endpoint-fallback loop. Actual networking is
//! injected through [`Transport`].

pub mod config;
pub mod fallback;
pub mod response;

pub use config::ProviderConfig;
pub use fallback::{CardProvider, FallbackProvider, Transport};
pub use response::{classify_response, error_message, ProviderOutcome, RawResponse, NO_CARDS_MARKER};
