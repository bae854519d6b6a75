//! Normalization of provider card records.
//!
//! The provider has shipped several casings for the same fields
//! (`CardID`, `cardID`, `id`, ...). They are folded into the canonical
//! [`Card`] once, here, so nothing downstream probes field names.

use serde::Deserialize;
use serde_json::Value;

use super::definition::{Card, CardId};
use crate::core::{CategoryId, LevelId};
use crate::error::ProviderError;

/// Numeric ids occasionally arrive as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(u64),
    Text(String),
}

impl IdRepr {
    fn into_u64(self) -> Option<u64> {
        match self {
            IdRepr::Number(n) => Some(n),
            IdRepr::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct RawCard {
    #[serde(alias = "CardID", alias = "cardID", alias = "cardId", alias = "CardId")]
    id: Option<IdRepr>,

    #[serde(alias = "CategoryID", alias = "categoryID", alias = "categoryId", alias = "CategoryId")]
    category: Option<u16>,

    #[serde(alias = "LevelID", alias = "levelID", alias = "levelId", alias = "LevelId")]
    level: Option<u8>,

    #[serde(alias = "CardDescription", alias = "cardDescription", alias = "Description")]
    description: Option<String>,
}

impl RawCard {
    fn into_card(self) -> Result<Card, String> {
        let id = self
            .id
            .ok_or("missing card id")?
            .into_u64()
            .ok_or("card id is not numeric")?;
        let category = self.category.ok_or("missing category id")?;
        if category == 0 {
            return Err("category id must be positive".to_string());
        }
        let level = self.level.ok_or("missing level id")?;
        let level = LevelId::new(level).ok_or_else(|| format!("level {level} is outside 1..=3"))?;

        Ok(Card::new(
            CardId::new(id),
            CategoryId::new(category),
            level,
            self.description.unwrap_or_default(),
        ))
    }
}

/// Normalize one provider record.
pub fn normalize_card(index: usize, record: Value) -> Result<Card, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidCard { index, reason };

    let raw: RawCard = serde_json::from_value(record).map_err(|e| invalid(e.to_string()))?;
    raw.into_card().map_err(invalid)
}

/// Normalize a provider body that should be a JSON array of card records.
///
/// `null` is treated as an empty list.
pub fn normalize_cards(body: Value) -> Result<Vec<Card>, ProviderError> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Array(records) => records
            .into_iter()
            .enumerate()
            .map(|(i, record)| normalize_card(i, record))
            .collect(),
        other => Err(ProviderError::MalformedBody(format!(
            "expected an array of cards, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
