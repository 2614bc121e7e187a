//! Litforge - narrative game design simulation library
//!
//! Projects character progression across a story, resolves combat actions
//! and rolls weighted loot tables, with batch statistics for balancing.
//! All randomness flows through [`rng::RandomSource`], so any seeded
//! `rand` generator makes a run reproducible.

pub mod character;
pub mod combat;
pub mod constants;
pub mod error;
pub mod loot;
pub mod progression;
pub mod rng;
pub mod simulator;

pub use combat::{resolve, simulate};
pub use error::{Result, SimError};
pub use loot::{analyze, roll};
pub use progression::project;
