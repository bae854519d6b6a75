//! Card data and ingestion.
//!
//! - `Card`: immutable prompt card (id, category, level, description)
//! - `CardList`: ordered, id-indexed list backing a deck
//! - `ingest`: folds the provider's field-name variants into `Card`

pub mod definition;
pub mod ingest;
pub mod registry;

pub use definition::{Card, CardId, Outcome};
pub use ingest::{normalize_card, normalize_cards};
pub use registry::CardList;
