//! Loot batch statistics and balance heuristics.

use super::roller::roll;
use super::types::{LootTable, Rarity};
use crate::constants::{
    BALANCE_EMPTY_ROLL_PENALTY, BALANCE_FULL_ROLL_BONUS, BALANCE_SCORE_BASE,
    HIGH_NOTHING_PERCENT, LOW_NOTHING_PERCENT,
};
use crate::error::{Result, SimError};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Statistics about a batch of loot rolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootStatistics {
    pub trials: u32,
    pub average_value: f64,
    /// Upper-middle element of the sorted values for even trial counts.
    pub median_value: u64,
    /// Population standard deviation.
    pub standard_deviation: f64,
    pub min_value: u64,
    pub max_value: u64,
    /// Share of rolls that produced no items, in percent.
    pub nothing_percentage: f64,
    /// Mean roll time in milliseconds.
    pub average_roll_time: f64,
    /// Items rolled per rarity tier.
    pub rarity_counts: BTreeMap<Rarity, u32>,
    /// Observed share of rolls that selected each entry, in table order.
    pub entry_frequencies: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceAnalysis {
    pub balance_score: i32,
    pub rating: String,
    pub warnings: Vec<String>,
}

impl BalanceAnalysis {
    /// Starts at 75; -20 when over half the rolls are empty, +10 when fewer
    /// than a tenth are.
    pub fn score(nothing_percentage: f64) -> i32 {
        let mut score = BALANCE_SCORE_BASE;
        if nothing_percentage > HIGH_NOTHING_PERCENT {
            score -= BALANCE_EMPTY_ROLL_PENALTY;
        }
        if nothing_percentage < LOW_NOTHING_PERCENT {
            score += BALANCE_FULL_ROLL_BONUS;
        }
        score
    }

    fn rating(score: i32) -> &'static str {
        if score >= BALANCE_SCORE_BASE + BALANCE_FULL_ROLL_BONUS {
            "GENEROUS - Almost every roll pays out"
        } else if score >= BALANCE_SCORE_BASE {
            "FAIR - Mix of rewards and empty rolls"
        } else {
            "STINGY - Most rolls come up empty"
        }
    }

    fn from_statistics(table: &LootTable, total_weight: f64, stats: &LootStatistics) -> Self {
        let balance_score = Self::score(stats.nothing_percentage);
        let mut warnings = Vec::new();

        if total_weight <= 0.0 {
            warnings.push("Table has no weight - every roll is empty".to_string());
        }
        if stats.nothing_percentage > HIGH_NOTHING_PERCENT {
            warnings.push(format!(
                "{:.1}% of rolls drop nothing",
                stats.nothing_percentage
            ));
        }
        for (idx, entry) in table.entries.iter().enumerate() {
            if entry.weight == 0.0 && total_weight > 0.0 {
                warnings.push(format!("Entry {} ({}) can never drop", idx, entry.item_name()));
            }
        }
        if total_weight > 0.0 && stats.max_value == 0 && stats.nothing_percentage < 100.0 {
            warnings.push("Drops never carry any value".to_string());
        }

        Self {
            balance_score,
            rating: Self::rating(balance_score).to_string(),
            warnings,
        }
    }
}

/// Roll `table` `trials` times and summarize.
pub fn analyze<R: RandomSource + ?Sized>(
    table: &LootTable,
    trials: u32,
    rng: &mut R,
) -> Result<(LootStatistics, BalanceAnalysis)> {
    if trials < 1 {
        return Err(SimError::InvalidArgument(
            "loot analysis needs at least 1 trial".into(),
        ));
    }
    let total_weight = table.total_weight()?;

    let mut values = Vec::with_capacity(trials as usize);
    let mut empty_rolls = 0u32;
    let mut total_roll_time = 0.0;
    let mut rarity_counts: BTreeMap<Rarity, u32> = BTreeMap::new();
    let mut selections = vec![0u32; table.entries.len()];

    for _ in 0..trials {
        let result = roll(table, rng)?;
        if result.is_empty() {
            empty_rolls += 1;
        }
        for item in &result.items {
            *rarity_counts.entry(item.rarity).or_insert(0) += 1;
        }
        if let Some(idx) = result.selected {
            selections[idx] += 1;
        }
        total_roll_time += result.roll_time;
        values.push(result.total_value);
    }

    let n = trials as f64;
    let average_value = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - average_value).powi(2))
        .sum::<f64>()
        / n;

    values.sort_unstable();
    let median_value = values.get(values.len() / 2).copied().unwrap_or(0);

    let stats = LootStatistics {
        trials,
        average_value,
        median_value,
        standard_deviation: variance.sqrt(),
        min_value: values.first().copied().unwrap_or(0),
        max_value: values.last().copied().unwrap_or(0),
        nothing_percentage: empty_rolls as f64 / n * 100.0,
        average_roll_time: total_roll_time / n,
        rarity_counts,
        entry_frequencies: selections.iter().map(|&c| c as f64 / n).collect(),
    };
    let balance = BalanceAnalysis::from_statistics(table, total_weight, &stats);

    debug!(
        median = stats.median_value,
        std_dev = stats.standard_deviation,
        "loot batch summary"
    );
    info!(
        table = table.display_name(),
        trials,
        nothing_pct = stats.nothing_percentage,
        score = balance.balance_score,
        "loot analysis complete"
    );

    Ok((stats, balance))
}
