//! Selection criteria and the builder that produces them.
//!
//! The builder is a pure function: UI-level `{category -> chosen levels}`
//! in, a flat list of provider criteria out. Rejecting an empty result is the
//! caller's job, via [`SelectionRequest::new`].

use serde::{Deserialize, Serialize};

use super::levels::LevelSet;
use crate::core::{CategoryId, LevelId, ModeId};
use crate::error::SetupError;

/// One request unit for the card provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionCriterion {
    #[serde(rename = "ModeID")]
    pub mode: ModeId,

    #[serde(rename = "CategoryID")]
    pub category: CategoryId,

    #[serde(rename = "LevelID")]
    pub level: LevelId,

    #[serde(rename = "NumberOfCards")]
    pub count: u32,
}

/// Levels chosen for one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChoice {
    pub category: CategoryId,
    pub levels: LevelSet,
}

impl CategoryChoice {
    #[must_use]
    pub fn new(category: CategoryId, levels: LevelSet) -> Self {
        Self { category, levels }
    }
}

/// Expand category choices into criteria.
///
/// Categories keep their input order; within a category levels are
/// ascending. Categories with no levels chosen are skipped. `count` of zero
/// is raised to one.
#[must_use]
pub fn build_selections(
    mode: ModeId,
    choices: &[CategoryChoice],
    count: u32,
) -> Vec<SelectionCriterion> {
    let count = count.max(1);
    choices
        .iter()
        .flat_map(|choice| {
            choice.levels.iter().map(move |level| SelectionCriterion {
                mode,
                category: choice.category,
                level,
                count,
            })
        })
        .collect()
}

/// Request body sent to the provider: `{ "Selections": [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(rename = "Selections")]
    selections: Vec<SelectionCriterion>,
}

impl SelectionRequest {
    /// Wrap criteria for sending. An empty list is a validation failure.
    pub fn new(selections: Vec<SelectionCriterion>) -> Result<Self, SetupError> {
        if selections.is_empty() {
            return Err(SetupError::EmptySelection);
        }
        Ok(Self { selections })
    }

    #[must_use]
    pub fn selections(&self) -> &[SelectionCriterion] {
        &self.selections
    }

    /// Total cards asked for across all criteria.
    #[must_use]
    pub fn requested_cards(&self) -> u64 {
        self.selections.iter().map(|s| u64::from(s.count)).sum()
    }

    /// Encode as the provider's JSON body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
