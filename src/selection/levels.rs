//! Set of chosen difficulty levels for one category.

use serde::{Deserialize, Serialize};

use crate::core::LevelId;

/// Subset of levels `{1, 2, 3}`, stored as a bitmask.
///
/// Iteration is always ascending, whatever order levels were toggled in.
///
/// ```
/// use lovegame_deck::core::LevelId;
/// use lovegame_deck::selection::LevelSet;
///
/// let mut set = LevelSet::new();
/// set.toggle(LevelId::new(3).unwrap());
/// set.toggle(LevelId::new(1).unwrap());
/// let raw: Vec<u8> = set.iter().map(LevelId::raw).collect();
/// assert_eq!(raw, vec![1, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LevelSet(u8);

impl LevelSet {
    /// Empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// All three levels.
    #[must_use]
    pub const fn all() -> Self {
        Self(0b111)
    }

    const fn bit(level: LevelId) -> u8 {
        1 << (level.raw() - 1)
    }

    /// Add a level.
    pub fn insert(&mut self, level: LevelId) {
        self.0 |= Self::bit(level);
    }

    /// Remove a level.
    pub fn remove(&mut self, level: LevelId) {
        self.0 &= !Self::bit(level);
    }

    /// Flip a level on or off. Returns whether it is now selected.
    pub fn toggle(&mut self, level: LevelId) -> bool {
        self.0 ^= Self::bit(level);
        self.contains(level)
    }

    /// Select every level.
    pub fn select_all(&mut self) {
        *self = Self::all();
    }

    /// Deselect every level.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[must_use]
    pub const fn contains(self, level: LevelId) -> bool {
        self.0 & Self::bit(level) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Selected levels, ascending.
    pub fn iter(self) -> impl Iterator<Item = LevelId> {
        LevelId::ALL.into_iter().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<LevelId> for LevelSet {
    fn from_iter<I: IntoIterator<Item = LevelId>>(iter: I) -> Self {
        let mut set = Self::new();
        for level in iter {
            set.insert(level);
        }
        set
    }
}

// Serialized as an ascending list of level numbers, e.g. `[1, 3]`.
impl Serialize for LevelSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for LevelSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let levels = Vec::<LevelId>::deserialize(deserializer)?;
        Ok(levels.into_iter().collect())
    }
}
