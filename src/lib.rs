//! # lovegame-deck
//!
//! Engine for a card-prompt party game: players pick a mode (couple,
//! friends, family), choose categories and difficulty levels, then draw
//! prompt cards one at a time until the deck runs out.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: sessions and the selection builder do no I/O. Networking
//!    and storage are injected through traits.
//!
//! 2. **Configuration over convention**: mode ids, categories and player
//!    limits live in `ModeConfig`, not in constants scattered around.
//!
//! 3. **Normalize once**: provider records are folded into `Card` at the
//!    boundary; nothing downstream probes alternate field names.
//!
//! ## Flow
//!
//! ```text
//! GameSetup::players -> GameSetup::choose -> SelectionRequest
//!     -> CardProvider::fetch_cards -> ProviderOutcome
//!     -> GameSetup::start -> DeckSession (draw / finish / skip)
//! ```
//!
//! ## Modules
//!
//! - `core`: players, turn order, RNG, mode configuration
//! - `cards`: card data, id-indexed card lists, provider record normalization
//! - `selection`: level sets and the selection builder
//! - `provider`: endpoint config, response classification, fallback provider
//! - `setup`: validation and session construction
//! - `session`: the deck session state machine and its shared handle
//! - `storage`: injected key-value preferences
//! - `timer`: per-card countdown / stopwatch

pub mod cards;
pub mod core;
pub mod error;
pub mod provider;
pub mod selection;
pub mod session;
pub mod setup;
pub mod storage;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    CategoryConfig, CategoryId, DeckRng, GameMode, LevelId, ModeConfig, ModeId, PlayerId,
    PlayerName, PlayerPolicy, TurnOrder,
};

pub use crate::cards::{Card, CardId, CardList, Outcome};

pub use crate::selection::{build_selections, CategoryChoice, LevelSet, SelectionCriterion, SelectionRequest};

pub use crate::provider::{
    CardProvider, FallbackProvider, ProviderConfig, ProviderOutcome, RawResponse, Transport,
};

pub use crate::session::{DeckSession, Resolution, SessionPhase, SharedSession, TurnRecord};

pub use crate::setup::{GameSetup, SetupResult};

pub use crate::storage::{KeyValueStore, Language, MemoryStore, Preferences};

pub use crate::timer::{GameTimer, TimerMode};

pub use crate::error::{Error, ProviderError, Result, SessionError, SetupError, StorageError};
