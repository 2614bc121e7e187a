//! Simulation configuration and scenario files.

use crate::character::CharacterState;
use crate::combat::{CombatAction, CombatStats};
use crate::constants::DEFAULT_TRIALS;
use crate::error::{Result, SimError};
use crate::loot::LootTable;
use crate::progression::ProgressionSettings;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent trials per batch
    pub trials: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for iterating on a design
    pub fn quick() -> Self {
        Self {
            trials: 100,
            ..Default::default()
        }
    }

    /// Seeded RNG when a seed is set, entropy otherwise.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionScenario {
    #[serde(default)]
    pub character: CharacterState,
    pub story_length: u32,
    #[serde(default)]
    pub settings: ProgressionSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatScenario {
    pub action: CombatAction,
    #[serde(default)]
    pub attacker: CombatStats,
    #[serde(default)]
    pub defender: CombatStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootScenario {
    pub table: LootTable,
}

/// A designer scenario file. Each section is optional; a run only needs the
/// section for the module it exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Scenario {
    #[serde(default)]
    pub progression: Option<ProgressionScenario>,
    #[serde(default)]
    pub combat: Option<CombatScenario>,
    #[serde(default)]
    pub loot: Option<LootScenario>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn progression(&self) -> Result<&ProgressionScenario> {
        self.progression
            .as_ref()
            .ok_or_else(|| missing_section("progression"))
    }

    pub fn combat(&self) -> Result<&CombatScenario> {
        self.combat.as_ref().ok_or_else(|| missing_section("combat"))
    }

    pub fn loot(&self) -> Result<&LootScenario> {
        self.loot.as_ref().ok_or_else(|| missing_section("loot"))
    }
}

fn missing_section(name: &str) -> SimError {
    SimError::InvalidArgument(format!("scenario has no {name} section"))
}
