//! Game mode configuration.
//!
//! Hosts configure a game by picking a `ModeConfig`:
//! - `ModeId`, `CategoryId`, `LevelId`: the provider's numeric identifiers
//! - `CategoryConfig`: which categories the mode offers
//! - `PlayerPolicy`: how many seats, how many must be filled, default names
//!
//! The ids are opaque to the engine. The defaults reproduce the shipped
//! couple / friends / family setups, but every field can be overridden or
//! loaded from JSON.

use serde::{Deserialize, Serialize};

use super::player::PlayerName;
use crate::error::SetupError;

/// Game mode identifier as the provider knows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeId(pub u16);

impl ModeId {
    /// Create a new mode ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ModeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mode({})", self.0)
    }
}

/// Card theme identifier (1 = introductory, 2 = light/fun, 3 = intense).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u16);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// Difficulty level, always in `1..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LevelId(u8);

impl LevelId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// All levels in ascending order.
    pub const ALL: [LevelId; 3] = [LevelId(1), LevelId(2), LevelId(3)];

    /// Create a level, rejecting values outside `1..=3`.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level >= Self::MIN && level <= Self::MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Get the raw level value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LevelId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("level {value} is outside 1..=3"))
    }
}

impl From<LevelId> for u8 {
    fn from(level: LevelId) -> Self {
        level.0
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

/// The three shipped game modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Couple,
    Friends,
    Family,
}

impl GameMode {
    /// Provider mode id for this mode.
    #[must_use]
    pub const fn id(self) -> ModeId {
        match self {
            GameMode::Couple => ModeId(1),
            GameMode::Friends => ModeId(2),
            GameMode::Family => ModeId(3),
        }
    }

    /// Reverse of [`GameMode::id`].
    #[must_use]
    pub const fn from_id(id: ModeId) -> Option<Self> {
        match id.0 {
            1 => Some(GameMode::Couple),
            2 => Some(GameMode::Friends),
            3 => Some(GameMode::Family),
            _ => None,
        }
    }
}

/// One category a mode offers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Provider category id.
    pub id: CategoryId,

    /// Stable key for localization lookups ("intro", "fun", ...).
    pub key: String,
}

impl CategoryConfig {
    /// Create a new category configuration.
    pub fn new(id: CategoryId, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
        }
    }
}

/// Seat rules for a mode.
///
/// `max_players` is the number of name fields offered. Blank fields are
/// filled from `default_names` by position where a default exists, as long
/// as seats remain under `max_players`, then dropped. Typed names always
/// keep their seat. What remains must number at least `min_players`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPolicy {
    pub min_players: usize,
    pub max_players: usize,
    #[serde(default)]
    pub default_names: Vec<String>,
}

impl PlayerPolicy {
    /// Create a policy with no default names.
    #[must_use]
    pub fn new(min_players: usize, max_players: usize) -> Self {
        Self {
            min_players,
            max_players,
            default_names: Vec::new(),
        }
    }

    /// Set default names used for blank seats (builder pattern).
    #[must_use]
    pub fn with_default_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Turn raw name fields into a validated seat list.
    pub fn resolve<S: AsRef<str>>(
        &self,
        mode: ModeId,
        raw_names: &[S],
    ) -> Result<Vec<PlayerName>, SetupError> {
        let named: Vec<Option<PlayerName>> = raw_names
            .iter()
            .map(|n| PlayerName::parse(n.as_ref()))
            .collect();
        let named_count = named.iter().flatten().count();
        if named_count > self.max_players {
            return Err(SetupError::TooManyPlayers {
                mode,
                max: self.max_players,
                got: named_count,
            });
        }

        // Defaults only fill seats the typed names leave free.
        let mut free_seats = self.max_players - named_count;
        let seat_count = named.len().max(self.default_names.len());
        let mut players = Vec::with_capacity(seat_count.min(self.max_players));
        for seat in 0..seat_count {
            match named.get(seat).cloned().flatten() {
                Some(name) => players.push(name),
                None if free_seats > 0 => {
                    let default = self.default_names.get(seat).and_then(|d| PlayerName::parse(d));
                    if let Some(name) = default {
                        players.push(name);
                        free_seats -= 1;
                    }
                }
                None => {}
            }
        }

        if players.len() < self.min_players.max(1) {
            return Err(SetupError::NotEnoughPlayers {
                mode,
                min: self.min_players.max(1),
                got: players.len(),
            });
        }
        Ok(players)
    }
}

/// Everything the engine needs to know about a mode.
///
/// ## Example
///
/// ```
/// use lovegame_deck::core::{GameMode, ModeConfig};
///
/// let config = ModeConfig::for_mode(GameMode::Family).with_count_per_category(8);
/// assert_eq!(config.mode.raw(), 3);
/// assert_eq!(config.players.min_players, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeConfig {
    pub mode: ModeId,
    pub categories: Vec<CategoryConfig>,
    pub count_per_category: u32,
    pub players: PlayerPolicy,
}

impl ModeConfig {
    /// Cards requested per (category, level) unless overridden.
    pub const DEFAULT_COUNT: u32 = 5;

    /// Create an empty configuration for a mode id.
    #[must_use]
    pub fn new(mode: ModeId, players: PlayerPolicy) -> Self {
        Self {
            mode,
            categories: Vec::new(),
            count_per_category: Self::DEFAULT_COUNT,
            players,
        }
    }

    /// The shipped configuration for one of the built-in modes.
    #[must_use]
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Couple => Self::new(
                mode.id(),
                PlayerPolicy::new(1, 2).with_default_names(["Player 1", "Player 2"]),
            )
            .with_category(CategoryConfig::new(CategoryId(1), "intro"))
            .with_category(CategoryConfig::new(CategoryId(2), "fun"))
            .with_category(CategoryConfig::new(CategoryId(3), "passion")),
            GameMode::Friends => Self::new(mode.id(), PlayerPolicy::new(1, 6))
                .with_category(CategoryConfig::new(CategoryId(1), "intro"))
                .with_category(CategoryConfig::new(CategoryId(2), "fun"))
                .with_category(CategoryConfig::new(CategoryId(3), "team")),
            GameMode::Family => Self::new(mode.id(), PlayerPolicy::new(2, 6))
                .with_category(CategoryConfig::new(CategoryId(1), "intro"))
                .with_category(CategoryConfig::new(CategoryId(2), "fun"))
                .with_category(CategoryConfig::new(CategoryId(3), "team")),
        }
    }

    /// Add a category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: CategoryConfig) -> Self {
        self.categories.push(category);
        self
    }

    /// Set the per-(category, level) card count.
    #[must_use]
    pub fn with_count_per_category(mut self, count: u32) -> Self {
        self.count_per_category = count.max(1);
        self
    }

    /// Replace the player policy.
    #[must_use]
    pub fn with_players(mut self, players: PlayerPolicy) -> Self {
        self.players = players;
        self
    }

    /// Does this mode offer the given category?
    #[must_use]
    pub fn offers(&self, category: CategoryId) -> bool {
        self.categories.iter().any(|c| c.id == category)
    }

    /// Look up a category by its key.
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert!(LevelId::new(0).is_none());
        assert_eq!(LevelId::new(1).unwrap().raw(), 1);
        assert_eq!(LevelId::new(3).unwrap().raw(), 3);
        assert!(LevelId::new(4).is_none());
        assert!(serde_json::from_str::<LevelId>("4").is_err());
    }

    #[test]
    fn test_mode_ids() {
        assert_eq!(GameMode::Couple.id(), ModeId(1));
        assert_eq!(GameMode::Friends.id(), ModeId(2));
        assert_eq!(GameMode::Family.id(), ModeId(3));
        assert_eq!(GameMode::from_id(ModeId(3)), Some(GameMode::Family));
        assert_eq!(GameMode::from_id(ModeId(9)), None);
    }

    #[test]
    fn test_couple_fills_default_names() {
        let config = ModeConfig::for_mode(GameMode::Couple);
        let players = config.players.resolve(config.mode, &["  ", "Ben"]).unwrap();
        let names: Vec<_> = players.iter().map(PlayerName::as_str).collect();
        assert_eq!(names, vec!["Player 1", "Ben"]);

        let players = config.players.resolve::<&str>(config.mode, &[]).unwrap();
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn test_family_requires_two() {
        let config = ModeConfig::for_mode(GameMode::Family);
        let err = config
            .players
            .resolve(config.mode, &["Ana", "", "   "])
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::NotEnoughPlayers {
                mode: ModeId(3),
                min: 2,
                got: 1
            }
        );

        let ok = config.players.resolve(config.mode, &["Ana", "", "Cai"]).unwrap();
        assert_eq!(ok.len(), 2);
    }

    #[test]
    fn test_friends_accepts_one() {
        let config = ModeConfig::for_mode(GameMode::Friends);
        assert_eq!(config.players.resolve(config.mode, &["Solo"]).unwrap().len(), 1);
        assert!(config.players.resolve::<&str>(config.mode, &["", ""]).is_err());
    }

    #[test]
    fn test_too_many_players() {
        let config = ModeConfig::for_mode(GameMode::Couple);
        let err = config
            .players
            .resolve(config.mode, &["A", "B", "C"])
            .unwrap_err();
        assert!(matches!(err, SetupError::TooManyPlayers { max: 2, got: 3, .. }));

        // Extra blank fields are harmless.
        assert!(config.players.resolve(config.mode, &["A", "B", " "]).is_ok());
    }

    #[test]
    fn test_defaults_never_exceed_seat_limit() {
        let config = ModeConfig::for_mode(GameMode::Couple);
        let players = config.players.resolve(config.mode, &["", "", "Cai"]).unwrap();
        let names: Vec<_> = players.iter().map(PlayerName::as_str).collect();
        assert_eq!(names, vec!["Player 1", "Cai"]);

        let players = config.players.resolve(config.mode, &["", "", "Cai", "Dee"]).unwrap();
        let names: Vec<_> = players.iter().map(PlayerName::as_str).collect();
        assert_eq!(names, vec!["Cai", "Dee"]);
    }

    #[test]
    fn test_mode_config_builder() {
        let config = ModeConfig::for_mode(GameMode::Couple).with_count_per_category(0);
        assert_eq!(config.count_per_category, 1);
        assert!(config.offers(CategoryId(3)));
        assert_eq!(config.category("passion").unwrap().id, CategoryId(3));
        assert!(config.category("team").is_none());
    }

    #[test]
    fn test_mode_config_from_json() {
        let json = r#"{
            "mode": 7,
            "categories": [{"id": 1, "key": "intro"}],
            "count_per_category": 3,
            "players": {"min_players": 2, "max_players": 4}
        }"#;
        let config: ModeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, ModeId(7));
        assert_eq!(config.count_per_category, 3);
        assert!(config.players.default_names.is_empty());
    }
}
