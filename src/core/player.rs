//! Player identification and turn rotation.
//!
//! ## PlayerId
//!
//! Seat index, 0-based, in the order names were entered.
//!
//! ## PlayerName
//!
//! A display name that is guaranteed non-empty after trimming.
//!
//! ## TurnOrder
//!
//! The fixed seat list for one game plus whose turn it is. Rotation is
//! `(index + 1) mod len`; with a single seat it is a no-op.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Seat identifier. The first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A player's display name, trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Trim `raw` and wrap it. Returns `None` if nothing is left.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| "player name is blank".to_string())
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Seats for one game. Six covers every shipped mode without spilling.
pub type Seats = SmallVec<[PlayerName; 6]>;

/// Ordered players plus the seat whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    players: Seats,
    current: usize,
}

impl TurnOrder {
    /// Create a turn order starting at the first seat.
    ///
    /// Returns `None` for an empty list or more than 255 seats. Minimum-player
    /// rules belong to the mode's `PlayerPolicy`, not here.
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = PlayerName>) -> Option<Self> {
        let players: Seats = players.into_iter().collect();
        if players.is_empty() || players.len() > usize::from(u8::MAX) {
            return None;
        }
        Some(Self { players, current: 0 })
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        PlayerId(self.current as u8)
    }

    /// Index of the seat whose turn it is, in `[0, player_count)`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Name of the seat whose turn it is.
    #[must_use]
    pub fn current_name(&self) -> &PlayerName {
        &self.players[self.current]
    }

    /// Look up a seat's name.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> Option<&PlayerName> {
        self.players.get(player.index())
    }

    /// Move to the next seat, wrapping around. Returns the new current seat.
    pub fn advance(&mut self) -> PlayerId {
        self.current = (self.current + 1) % self.players.len();
        self.current()
    }

    /// All seat names in order.
    #[must_use]
    pub fn players(&self) -> &[PlayerName] {
        &self.players
    }

    /// Iterate over (PlayerId, &PlayerName) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerName)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, name)| (PlayerId(i as u8), name))
    }
}
