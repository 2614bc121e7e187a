//! Loot roller: weighted table rolls and batch balance analysis.

pub mod analysis;
pub mod roller;
pub mod types;

pub use analysis::{analyze, BalanceAnalysis, LootStatistics};
pub use roller::roll;
pub use types::{GeneratedItem, LootEntry, LootTable, LootType, QuantityRange, Rarity, RollResult};
