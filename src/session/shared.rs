//! Serialized access to a session for hosts that can double-tap.
//!
//! A UI that delivers overlapping events (two fast taps on "draw") must not
//! end up with two cards on display. `SharedSession` puts the session behind
//! a mutex so each operation runs whole, and offers `draw_or_current`, which
//! answers a duplicate draw with the card already shown.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::deck::{DeckSession, SessionPhase, TurnRecord};
use crate::cards::Card;
use crate::error::SessionError;

/// Cloneable handle to one mutex-guarded session.
#[derive(Clone, Debug)]
pub struct SharedSession {
    inner: Arc<Mutex<DeckSession>>,
}

impl SharedSession {
    #[must_use]
    pub fn new(session: DeckSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Same contract as [`DeckSession::draw`]; returns an owned card.
    pub fn draw(&self) -> Result<Card, SessionError> {
        self.inner.lock().draw().cloned()
    }

    /// Draw, or if a card is already on display return that one instead.
    pub fn draw_or_current(&self) -> Result<Card, SessionError> {
        let mut session = self.inner.lock();
        if let Some(card) = session.current_card() {
            debug!(card = card.id.raw(), "duplicate draw ignored");
            return Ok(card.clone());
        }
        session.draw().cloned()
    }

    pub fn finish(&self) -> Result<TurnRecord, SessionError> {
        self.inner.lock().finish()
    }

    pub fn skip(&self) -> Result<TurnRecord, SessionError> {
        self.inner.lock().skip()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.inner.lock().phase()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.inner.lock().is_exhausted()
    }

    /// Run a read-only query under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&DeckSession) -> R) -> R {
        f(&self.inner.lock())
    }

    /// O(1) copy of the current session state.
    #[must_use]
    pub fn snapshot(&self) -> DeckSession {
        self.inner.lock().clone()
    }
}
