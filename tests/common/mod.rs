//! Shared helpers for integration tests.

#![allow(dead_code)]

use lovegame_deck::{Card, CardId, CategoryId, LevelId, PlayerName};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(id: u64, category: u16, level: u8, description: &str) -> Card {
    Card::new(
        CardId::new(id),
        CategoryId::new(category),
        LevelId::new(level).expect("level in 1..=3"),
        description,
    )
}

/// `n` cards with ids `1..=n`, cycling through categories and levels.
pub fn deck(n: u64) -> Vec<Card> {
    (1..=n)
        .map(|i| card(i, (i % 3 + 1) as u16, ((i / 3) % 3 + 1) as u8, "prompt"))
        .collect()
}

pub fn players(names: &[&str]) -> Vec<PlayerName> {
    names
        .iter()
        .map(|n| PlayerName::parse(n).expect("non-blank name"))
        .collect()
}
