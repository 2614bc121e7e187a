//! Batch simulation harness for designer scenarios.
//!
//! A [`Scenario`] file carries one section per engine module. The runner
//! feeds a section through the engine with the RNG described by a
//! [`SimConfig`] and returns a [`SimReport`] that renders as text or JSON.

mod config;
mod report;
mod runner;

pub use config::{CombatScenario, LootScenario, ProgressionScenario, Scenario, SimConfig};
pub use report::SimReport;
pub use runner::{run_combat, run_loot, run_progression};
