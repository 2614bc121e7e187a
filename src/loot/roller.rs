//! Weighted loot roll.

use super::types::{GeneratedItem, LootTable, LootType, RollResult};
use crate::constants::LOOT_VALUE_PER_UNIT;
use crate::error::Result;
use crate::rng::RandomSource;
use std::time::Instant;
use tracing::warn;

/// Roll `table` once.
///
/// Picks one entry with probability `weight / total_weight` by a linear scan
/// over cumulative weights; entry order only breaks ties. A table whose
/// weights sum to zero rolls nothing instead of failing.
pub fn roll<R: RandomSource + ?Sized>(table: &LootTable, rng: &mut R) -> Result<RollResult> {
    let started = Instant::now();
    let total_weight = table.total_weight()?;

    if total_weight <= 0.0 {
        warn!(table = table.display_name(), "loot table has no weight, rolling nothing");
        return Ok(RollResult::empty(elapsed_ms(started)));
    }

    let r = rng.up_to(total_weight);
    let Some(selected) = pick_entry(table, r) else {
        return Ok(RollResult::empty(elapsed_ms(started)));
    };
    let entry = &table.entries[selected];

    let mut items = Vec::new();
    if entry.loot_type != LootType::Nothing {
        let quantity = rng.int_inclusive(entry.quantity.min, entry.quantity.max);
        items.push(GeneratedItem {
            name: entry.item_name(),
            quantity,
            rarity: entry.rarity,
            value: quantity as u64 * LOOT_VALUE_PER_UNIT,
        });
    }

    let total_value = items.iter().map(|item| item.value).sum();
    Ok(RollResult {
        items,
        total_value,
        roll_time: elapsed_ms(started),
        selected: Some(selected),
    })
}

/// First positive-weight entry whose cumulative weight reaches `r`.
///
/// Falls back to the last positive-weight entry when float rounding leaves
/// the running sum just short of `r`.
fn pick_entry(table: &LootTable, r: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (idx, entry) in table.entries.iter().enumerate() {
        if entry.weight <= 0.0 {
            continue;
        }
        cumulative += entry.weight;
        last_positive = Some(idx);
        if cumulative >= r {
            return Some(idx);
        }
    }
    last_positive
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
