//! Error types.
//!
//! Each area has its own enum so callers can match on exactly the failures
//! that area produces. [`Error`] folds them together for hosts that just want
//! one `?`-friendly type.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::ModeId;

/// Deck session misuse. These mean the caller invoked an operation out of
/// order; they are never retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("a card is already on display; finish or skip it first")]
    AlreadyShowing,

    #[error("no card is on display")]
    NoCurrentCard,

    #[error("the deck is exhausted")]
    Exhausted,
}

/// Failures talking to the card provider.
///
/// "No matching cards" is not here: it is a normal outcome, reported as
/// `ProviderOutcome::NoMatches`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("transport error at {url}: {message}")]
    Transport { url: String, message: String },

    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("provider body is not valid card JSON: {0}")]
    MalformedBody(String),

    #[error("invalid card record at index {index}: {reason}")]
    InvalidCard { index: usize, reason: String },

    #[error("no provider endpoint is reachable")]
    Unreachable,
}

/// Caller-level validation before a request is sent or a session is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("choose at least one category and level")]
    EmptySelection,

    #[error("{mode} needs at least {min} players, got {got}")]
    NotEnoughPlayers { mode: ModeId, min: usize, got: usize },

    #[error("{mode} allows at most {max} players, got {got}")]
    TooManyPlayers { mode: ModeId, max: usize, got: usize },

    #[error("{0} appears more than once in the deck")]
    DuplicateCard(CardId),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Key-value store failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage backend error for key {key}: {message}")]
    Backend { key: String, message: String },
}

/// Any error this crate produces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
