//! Game setup: from a mode's form state to a running deck session.
//!
//! Validation happens before anything is sent:
//! 1. player names against the mode's `PlayerPolicy`
//! 2. the category/level choice must yield at least one criterion
//!
//! After the provider answers, an empty result becomes
//! `SetupResult::NoMatches`. That is deliberately distinct from a session
//! played to exhaustion, even if the UI offers the same "back to setup"
//! button for both.

use tracing::debug;

use crate::cards::CardList;
use crate::core::{DeckRng, ModeConfig, PlayerName, TurnOrder};
use crate::error::{ProviderError, SetupError};
use crate::provider::{CardProvider, ProviderOutcome};
use crate::selection::{build_selections, CategoryChoice, SelectionRequest};
use crate::session::DeckSession;

/// Result of starting a game.
#[derive(Debug)]
pub enum SetupResult {
    /// Cards arrived; play can begin.
    Ready(DeckSession),
    /// The provider had nothing for this selection. Ask the user to change
    /// categories or levels.
    NoMatches,
}

/// Validated game setup for one mode.
///
/// ## Example
///
/// ```
/// use lovegame_deck::core::{CategoryId, DeckRng, GameMode, ModeConfig};
/// use lovegame_deck::provider::ProviderOutcome;
/// use lovegame_deck::selection::{CategoryChoice, LevelSet};
/// use lovegame_deck::setup::{GameSetup, SetupResult};
///
/// let setup = GameSetup::new(ModeConfig::for_mode(GameMode::Friends))
///     .players(&["Dana"]).unwrap()
///     .choose(&[CategoryChoice::new(CategoryId::new(2), LevelSet::all())]).unwrap();
///
/// assert_eq!(setup.request().unwrap().selections().len(), 3);
///
/// let result = setup.start(Ok(ProviderOutcome::NoMatches), DeckRng::new(1)).unwrap();
/// assert!(matches!(result, SetupResult::NoMatches));
/// ```
#[derive(Clone, Debug)]
pub struct GameSetup {
    config: ModeConfig,
    players: Vec<PlayerName>,
    request: Option<SelectionRequest>,
}

impl GameSetup {
    #[must_use]
    pub fn new(config: ModeConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            request: None,
        }
    }

    /// Apply the mode's player policy to the raw name fields.
    pub fn players<S: AsRef<str>>(mut self, raw_names: &[S]) -> Result<Self, SetupError> {
        self.players = self
            .config
            .players
            .resolve(self.config.mode, raw_names)
            .map_err(|err| {
                debug!(error = %err, "player names rejected");
                err
            })?;
        Ok(self)
    }

    /// Build the selection request from category choices.
    ///
    /// Choices for categories the mode doesn't offer are ignored.
    pub fn choose(mut self, choices: &[CategoryChoice]) -> Result<Self, SetupError> {
        let offered: Vec<CategoryChoice> = choices
            .iter()
            .copied()
            .filter(|c| self.config.offers(c.category))
            .collect();
        let criteria = build_selections(self.config.mode, &offered, self.config.count_per_category);
        let request = SelectionRequest::new(criteria).map_err(|err| {
            debug!(mode = self.config.mode.raw(), "empty selection rejected");
            err
        })?;
        self.request = Some(request);
        Ok(self)
    }

    #[must_use]
    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    #[must_use]
    pub fn resolved_players(&self) -> &[PlayerName] {
        &self.players
    }

    /// The request to send, once `choose` has succeeded.
    #[must_use]
    pub fn request(&self) -> Option<&SelectionRequest> {
        self.request.as_ref()
    }

    /// Turn the provider's answer into a session.
    pub fn start(
        self,
        outcome: Result<ProviderOutcome, ProviderError>,
        rng: DeckRng,
    ) -> Result<SetupResult, SetupError> {
        let cards = match outcome? {
            ProviderOutcome::Cards(cards) if !cards.is_empty() => cards,
            _ => {
                debug!(mode = self.config.mode.raw(), "provider returned no cards");
                return Ok(SetupResult::NoMatches);
            }
        };

        let cards = CardList::new(cards)?;
        let turn = TurnOrder::new(self.players).ok_or(SetupError::NotEnoughPlayers {
            mode: self.config.mode,
            min: self.config.players.min_players.max(1),
            got: 0,
        })?;
        Ok(SetupResult::Ready(DeckSession::new(cards, turn, self.config.mode, rng)))
    }

    /// Send the request through `provider` and start the game.
    pub fn fetch_and_start<P: CardProvider>(
        self,
        provider: &P,
        rng: DeckRng,
    ) -> Result<SetupResult, SetupError> {
        let request = self.request.as_ref().ok_or(SetupError::EmptySelection)?;
        let outcome = provider.fetch_cards(request);
        self.start(outcome, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};
    use crate::core::{CategoryId, GameMode, LevelId, ModeId};
    use crate::selection::LevelSet;

    fn lvl(n: u8) -> LevelId {
        LevelId::new(n).unwrap()
    }

    fn cards(n: u64) -> Vec<Card> {
        (1..=n)
            .map(|i| Card::new(CardId::new(i), CategoryId::new(1), lvl(1), "x"))
            .collect()
    }

    fn family() -> GameSetup {
        GameSetup::new(ModeConfig::for_mode(GameMode::Family))
            .players(&["Mom", "Dad", ""])
            .unwrap()
            .choose(&[CategoryChoice::new(CategoryId::new(1), [lvl(1)].into_iter().collect())])
            .unwrap()
    }

    #[test]
    fn test_ready_session() {
        let result = family().start(Ok(ProviderOutcome::Cards(cards(3))), DeckRng::new(1)).unwrap();
        match result {
            SetupResult::Ready(session) => {
                assert_eq!(session.total_count(), 3);
                assert_eq!(session.players().len(), 2);
                assert_eq!(session.mode(), ModeId::new(3));
            }
            SetupResult::NoMatches => panic!("expected a session"),
        }
    }

    #[test]
    fn test_empty_cards_is_no_matches() {
        let result = family().start(Ok(ProviderOutcome::Cards(Vec::new())), DeckRng::new(1)).unwrap();
        assert!(matches!(result, SetupResult::NoMatches));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let err = family()
            .start(Err(ProviderError::Unreachable), DeckRng::new(1))
            .unwrap_err();
        assert_eq!(err, SetupError::Provider(ProviderError::Unreachable));
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = GameSetup::new(ModeConfig::for_mode(GameMode::Couple))
            .choose(&[CategoryChoice::new(CategoryId::new(1), LevelSet::new())])
            .unwrap_err();
        assert_eq!(err, SetupError::EmptySelection);
    }

    #[test]
    fn test_unoffered_category_ignored() {
        let err = GameSetup::new(ModeConfig::for_mode(GameMode::Couple))
            .choose(&[CategoryChoice::new(CategoryId::new(9), LevelSet::all())])
            .unwrap_err();
        assert_eq!(err, SetupError::EmptySelection);
    }

    #[test]
    fn test_duplicate_cards_rejected() {
        let mut dup = cards(2);
        dup.push(dup[0].clone());
        let err = family().start(Ok(ProviderOutcome::Cards(dup)), DeckRng::new(1)).unwrap_err();
        assert_eq!(err, SetupError::DuplicateCard(CardId::new(1)));
    }

    #[test]
    fn test_players_never_set() {
        let setup = GameSetup::new(ModeConfig::for_mode(GameMode::Friends))
            .choose(&[CategoryChoice::new(CategoryId::new(1), LevelSet::all())])
            .unwrap();
        let err = setup.start(Ok(ProviderOutcome::Cards(cards(1))), DeckRng::new(1)).unwrap_err();
        assert!(matches!(err, SetupError::NotEnoughPlayers { got: 0, .. }));
    }
}
