//! Runs scenario sections through the engine and wraps the results in a
//! [`SimReport`].

use super::config::{CombatScenario, LootScenario, ProgressionScenario, SimConfig};
use super::report::SimReport;
use crate::combat::simulate;
use crate::error::Result;
use crate::loot::analyze;
use crate::progression::project;
use tracing::info;

/// Project a character across the scenario's story. No randomness involved.
pub fn run_progression(scenario: &ProgressionScenario) -> Result<SimReport> {
    let snapshots = project(
        &scenario.character,
        scenario.story_length,
        &scenario.settings,
    )?;
    Ok(SimReport::Progression {
        start: scenario.character.clone(),
        curve: scenario.settings.leveling_curve,
        snapshots,
    })
}

/// Run a combat batch with the RNG described by `config`.
pub fn run_combat(config: &SimConfig, scenario: &CombatScenario) -> Result<SimReport> {
    let mut rng = config.rng();
    if config.verbosity >= 2 {
        info!(seed = ?config.seed, trials = config.trials, "starting combat batch");
    }
    let stats = simulate(
        &scenario.action,
        &scenario.attacker,
        &scenario.defender,
        config.trials,
        &mut rng,
    )?;
    Ok(SimReport::Combat {
        action: scenario.action.display_name().to_string(),
        seed: config.seed,
        stats,
    })
}

/// Run a loot analysis with the RNG described by `config`.
pub fn run_loot(config: &SimConfig, scenario: &LootScenario) -> Result<SimReport> {
    let mut rng = config.rng();
    if config.verbosity >= 2 {
        info!(seed = ?config.seed, trials = config.trials, "starting loot batch");
    }
    let (stats, balance) = analyze(&scenario.table, config.trials, &mut rng)?;
    Ok(SimReport::Loot {
        table: scenario.table.clone(),
        seed: config.seed,
        stats,
        balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::config::Scenario;

    fn scenario() -> Scenario {
        Scenario::from_json(
            r#"{
                "progression": {"storyLength": 5, "settings": {
                    "experienceRate": 1000, "statGrowthRate": 1, "skillUnlockRate": 1
                }},
                "combat": {"action": {"name": "Jab", "baseDamage": 8, "accuracy": 95}},
                "loot": {"table": {"entries": [{"type": "item", "rarity": "rare", "weight": 1}]}}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_run_progression() {
        let report = run_progression(scenario().progression().unwrap()).unwrap();
        match report {
            SimReport::Progression { snapshots, .. } => {
                assert_eq!(snapshots.len(), 5);
                assert_eq!(snapshots[0].level, 2);
            }
            other => panic!("expected progression report, got {other:?}"),
        }
    }

    #[test]
    fn test_seeded_combat_runs_repeat() {
        let config = SimConfig {
            seed: Some(12345),
            ..SimConfig::quick()
        };
        let combat = scenario().combat.unwrap();
        let a = run_combat(&config, &combat).unwrap();
        let b = run_combat(&config, &combat).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_entry_loot_never_empty() {
        let config = SimConfig {
            seed: Some(1),
            ..SimConfig::quick()
        };
        let report = run_loot(&config, scenario().loot().unwrap()).unwrap();
        match report {
            SimReport::Loot { stats, .. } => assert_eq!(stats.nothing_percentage, 0.0),
            other => panic!("expected loot report, got {other:?}"),
        }
    }
}
