//! Deck session: random draw without replacement plus turn rotation.
//!
//! ## State machine
//!
//! ```text
//!   Idle --draw--> CardShown --finish/skip--> Idle
//!     \
//!      `-- remaining empty --> Exhausted
//! ```
//!
//! Only `finish` shrinks the deck. `skip` hands the turn on but leaves the
//! card eligible, so it can come up again on any later draw, including the
//! very next one. Every draw is a fresh uniform pick over what remains.
//!
//! Uses `im` persistent vectors so cloning a session (for undo or
//! inspection by a host) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, CardId, CardList, Outcome};
use crate::core::{DeckRng, ModeId, PlayerId, PlayerName, TurnOrder};
use crate::error::{SessionError, SetupError};

/// Where the session is in its draw cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No card on display; `draw` is allowed.
    Idle,
    /// A card is on display; `finish` or `skip` it next.
    CardShown,
    /// Nothing left to draw.
    Exhausted,
}

/// How a shown card was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    Finished,
    Skipped,
}

/// One resolved turn, kept for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub card: CardId,
    pub outcome: Outcome,
    /// Seat whose turn it was when the card was resolved.
    pub player: PlayerId,
    pub resolution: Resolution,
}

/// Card on display and its slot in `remaining`.
///
/// The slot stays valid while the card is shown because only `finish`
/// mutates `remaining`.
#[derive(Clone, Copy, Debug)]
struct Shown {
    id: CardId,
    slot: usize,
}

/// Per-game deck state.
///
/// ## Example
///
/// ```
/// use lovegame_deck::cards::{Card, CardId};
/// use lovegame_deck::core::{CategoryId, DeckRng, LevelId, ModeId, PlayerName};
/// use lovegame_deck::session::DeckSession;
///
/// let level = LevelId::new(1).unwrap();
/// let cards = vec![Card::new(CardId::new(1), CategoryId::new(1), level, "Tell a story")];
/// let players = vec![PlayerName::parse("Ana").unwrap()];
///
/// let mut session = DeckSession::from_parts(cards, players, ModeId::new(1), DeckRng::new(7)).unwrap();
/// let card = session.draw().unwrap();
/// assert_eq!(card.description, "Tell a story");
/// session.finish().unwrap();
/// assert!(session.is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct DeckSession {
    cards: CardList,
    remaining: Vector<CardId>,
    current: Option<Shown>,
    turn: TurnOrder,
    revealed: usize,
    last_outcome: Option<Outcome>,
    history: Vector<TurnRecord>,
    mode: ModeId,
    rng: DeckRng,
}

impl DeckSession {
    /// Create a session over a validated card list and seat order.
    #[must_use]
    pub fn new(cards: CardList, turn: TurnOrder, mode: ModeId, rng: DeckRng) -> Self {
        let remaining: Vector<CardId> = cards.ids().collect();
        debug!(
            mode = mode.raw(),
            cards = cards.len(),
            players = turn.player_count(),
            seed = rng.seed(),
            "deck session created"
        );
        Self {
            cards,
            remaining,
            current: None,
            turn,
            revealed: 0,
            last_outcome: None,
            history: Vector::new(),
            mode,
            rng,
        }
    }

    /// Create a session from raw parts, validating ids and seats.
    pub fn from_parts(
        cards: Vec<Card>,
        players: Vec<PlayerName>,
        mode: ModeId,
        rng: DeckRng,
    ) -> Result<Self, SetupError> {
        let cards = CardList::new(cards)?;
        let turn = TurnOrder::new(players).ok_or(SetupError::NotEnoughPlayers {
            mode,
            min: 1,
            got: 0,
        })?;
        Ok(Self::new(cards, turn, mode, rng))
    }

    // === Operations ===

    /// Show a card chosen uniformly from the remaining ones.
    ///
    /// The deck is not changed until the card is finished.
    pub fn draw(&mut self) -> Result<&Card, SessionError> {
        if self.current.is_some() {
            return Err(SessionError::AlreadyShowing);
        }
        let slot = self
            .rng
            .pick_index(self.remaining.len())
            .ok_or(SessionError::Exhausted)?;
        let id = self.remaining[slot];
        self.current = Some(Shown { id, slot });

        debug!(
            card = id.raw(),
            remaining = self.remaining.len(),
            player = self.turn.current_index(),
            "card drawn"
        );
        Ok(self.card(id))
    }

    /// Mark the shown card as used: it leaves the deck and the turn passes.
    pub fn finish(&mut self) -> Result<TurnRecord, SessionError> {
        let shown = self.current.ok_or(SessionError::NoCurrentCard)?;
        let removed = self.remaining.remove(shown.slot);
        debug_assert_eq!(removed, shown.id);
        self.revealed += 1;
        Ok(self.resolve(shown.id, Resolution::Finished))
    }

    /// Pass on the shown card: it stays in the deck and the turn passes.
    pub fn skip(&mut self) -> Result<TurnRecord, SessionError> {
        let shown = self.current.ok_or(SessionError::NoCurrentCard)?;
        Ok(self.resolve(shown.id, Resolution::Skipped))
    }

    fn resolve(&mut self, id: CardId, resolution: Resolution) -> TurnRecord {
        let outcome = self.card(id).outcome();
        let record = TurnRecord {
            card: id,
            outcome,
            player: self.turn.current(),
            resolution,
        };

        self.last_outcome = Some(outcome);
        self.history.push_back(record);
        self.current = None;
        let next = self.turn.advance();

        debug!(
            card = id.raw(),
            ?resolution,
            remaining = self.remaining.len(),
            next_player = next.index(),
            "card resolved"
        );
        record
    }

    fn card(&self, id: CardId) -> &Card {
        // Every id in `remaining` came from `cards`.
        self.cards
            .get(id)
            .unwrap_or_else(|| unreachable!("{id} missing from its own deck"))
    }

    // === Queries ===

    /// Current state-machine phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.current.is_some() {
            SessionPhase::CardShown
        } else if self.remaining.is_empty() {
            SessionPhase::Exhausted
        } else {
            SessionPhase::Idle
        }
    }

    /// True iff no cards remain to be drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.cards.len()
    }

    /// Fraction of the deck finished, in `[0, 1]`. An empty deck reports 1.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.cards.is_empty() {
            return 1.0;
        }
        self.revealed as f64 / self.cards.len() as f64
    }

    /// Number of cards finished so far. Skips don't count.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// The card on display, if any.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.current.map(|shown| self.card(shown.id))
    }

    /// Whether `id` can still be drawn.
    #[must_use]
    pub fn is_remaining(&self, id: CardId) -> bool {
        self.remaining.contains(&id)
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current()
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.turn.current_index()
    }

    #[must_use]
    pub fn current_player_name(&self) -> &PlayerName {
        self.turn.current_name()
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerName] {
        self.turn.players()
    }

    /// (category, level) of the last finished or skipped card.
    #[must_use]
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Every resolution in order.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Mode the deck was requested for. Display only.
    #[must_use]
    pub fn mode(&self) -> ModeId {
        self.mode
    }

    /// All cards in provider order, including finished ones.
    #[must_use]
    pub fn cards(&self) -> &CardList {
        &self.cards
    }
}
