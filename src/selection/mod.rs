//! Selection Builder: per-category level choices to provider criteria.

pub mod builder;
pub mod levels;

pub use builder::{build_selections, CategoryChoice, SelectionCriterion, SelectionRequest};
pub use levels::LevelSet;
