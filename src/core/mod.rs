//! Core engine types: players, turn order, RNG, mode configuration.
//!
//! Nothing in here knows about cards or the provider. Hosts configure
//! modes via `ModeConfig` rather than the engine hardcoding them.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{CategoryConfig, CategoryId, GameMode, LevelId, ModeConfig, ModeId, PlayerPolicy};
pub use player::{PlayerId, PlayerName, Seats, TurnOrder};
pub use rng::DeckRng;
