//! Deck sessions.
//!
//! - `DeckSession`: single-threaded state machine over one dealt deck
//! - `SharedSession`: mutex-guarded handle for hosts with overlapping input

pub mod deck;
pub mod shared;

pub use deck::{DeckSession, Resolution, SessionPhase, TurnRecord};
pub use shared::SharedSession;
