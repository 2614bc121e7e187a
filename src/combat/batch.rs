//! Monte Carlo batch over repeated single-action resolutions.

use super::metrics::ActionMetrics;
use super::resolver::resolve;
use super::types::{CombatAction, CombatOutcome, CombatStats};
use crate::error::{Result, SimError};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Aggregate results of a combat batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatStatistics {
    pub trials: u32,
    pub hits: u32,
    pub misses: u32,
    pub criticals: u32,
    /// Mean damage over all trials, misses counting as 0.
    pub average_damage: f64,
    pub max_damage: u32,
    /// Smallest damage among hits; 0 when nothing hit.
    pub min_damage: u32,
    pub hit_rate_pct: f64,
    /// Criticals as a share of all trials.
    pub crit_rate_pct: f64,
    /// The first trial's outcome, for display.
    pub sample_outcome: CombatOutcome,
    pub metrics: ActionMetrics,
}

#[derive(Default)]
struct Tally {
    hits: u32,
    criticals: u32,
    total_damage: u64,
    max_damage: u32,
    min_damage: Option<u32>,
}

impl Tally {
    fn record(&mut self, outcome: &CombatOutcome) {
        if outcome.hit {
            self.hits += 1;
            self.total_damage += outcome.damage as u64;
            self.max_damage = self.max_damage.max(outcome.damage);
            self.min_damage = Some(
                self.min_damage
                    .map_or(outcome.damage, |m| m.min(outcome.damage)),
            );
        }
        if outcome.critical {
            self.criticals += 1;
        }
    }
}

/// Resolve `action` `trials` times independently and summarize.
pub fn simulate<R: RandomSource + ?Sized>(
    action: &CombatAction,
    attacker: &CombatStats,
    defender: &CombatStats,
    trials: u32,
    rng: &mut R,
) -> Result<CombatStatistics> {
    if trials < 1 {
        return Err(SimError::InvalidArgument(
            "combat simulation needs at least 1 trial".into(),
        ));
    }

    let sample_outcome = resolve(action, attacker, defender, rng);
    let mut tally = Tally::default();
    tally.record(&sample_outcome);
    for _ in 1..trials {
        tally.record(&resolve(action, attacker, defender, rng));
    }

    let n = trials as f64;
    let stats = CombatStatistics {
        trials,
        hits: tally.hits,
        misses: trials - tally.hits,
        criticals: tally.criticals,
        average_damage: tally.total_damage as f64 / n,
        max_damage: tally.max_damage,
        min_damage: tally.min_damage.unwrap_or(0),
        hit_rate_pct: tally.hits as f64 / n * 100.0,
        crit_rate_pct: tally.criticals as f64 / n * 100.0,
        sample_outcome,
        metrics: ActionMetrics::from_action(action),
    };

    debug!(
        hits = stats.hits,
        criticals = stats.criticals,
        average_damage = stats.average_damage,
        "combat batch summary"
    );
    info!(
        action = action.display_name(),
        trials,
        hit_rate = stats.hit_rate_pct,
        "combat batch complete"
    );

    Ok(stats)
}
