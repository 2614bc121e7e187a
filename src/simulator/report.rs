//! Simulation report generation.

use crate::character::{AttributeType, CharacterState};
use crate::combat::CombatStatistics;
use crate::error::Result;
use crate::loot::{BalanceAnalysis, LootStatistics, LootTable, Rarity};
use crate::progression::{LevelingCurve, ProgressionSnapshot};
use serde::Serialize;

/// Result of one scenario run, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SimReport {
    Progression {
        start: CharacterState,
        curve: LevelingCurve,
        snapshots: Vec<ProgressionSnapshot>,
    },
    Combat {
        action: String,
        seed: Option<u64>,
        stats: CombatStatistics,
    },
    Loot {
        table: LootTable,
        seed: Option<u64>,
        stats: LootStatistics,
        balance: BalanceAnalysis,
    },
}

const RULE: &str = "═══════════════════════════════════════════════════════════════\n";

impl SimReport {
    /// Short name used in exported file names.
    pub fn kind(&self) -> &'static str {
        match self {
            SimReport::Progression { .. } => "progression",
            SimReport::Combat { .. } => "combat",
            SimReport::Loot { .. } => "loot",
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        report.push_str(RULE);
        match self {
            SimReport::Progression {
                start,
                curve,
                snapshots,
            } => progression_text(&mut report, start, *curve, snapshots),
            SimReport::Combat {
                action,
                seed,
                stats,
            } => combat_text(&mut report, action, *seed, stats),
            SimReport::Loot {
                table,
                seed,
                stats,
                balance,
            } => loot_text(&mut report, table, *seed, stats, balance),
        }
        report.push_str(RULE);
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn seed_line(seed: Option<u64>) -> String {
    match seed {
        Some(seed) => format!("  Seed:                {}\n", seed),
        None => "  Seed:                (entropy)\n".to_string(),
    }
}

fn progression_text(
    report: &mut String,
    start: &CharacterState,
    curve: LevelingCurve,
    snapshots: &[ProgressionSnapshot],
) {
    report.push_str("                 PROGRESSION PROJECTION\n");
    report.push_str(RULE);
    report.push_str(&format!("  Start Level:   {}\n", start.level));
    report.push_str(&format!("  Chapters:      {}\n", snapshots.len()));
    report.push_str(&format!("  Curve:         {}\n\n", curve.name()));

    report.push_str("── CHAPTERS ─────────────────────────────────────────────────────\n");
    let mut header = String::from("  Ch   Lvl      XP     HP    MP   AC ");
    for attr in AttributeType::all() {
        header.push_str(&format!(" {:>4}", attr.abbrev()));
    }
    report.push_str(&header);
    report.push('\n');
    for snap in snapshots {
        let s = &snap.stats;
        let mut row = format!(
            "  {:3}  {:3}  {:7.0}  {:5}  {:4}  {:3} ",
            snap.chapter,
            snap.level,
            snap.experience,
            s.hit_points(),
            s.mana_points(),
            s.armor_class(),
        );
        for attr in AttributeType::all() {
            row.push_str(&format!(" {:>4}", s.get(attr)));
        }
        report.push_str(&row);
        report.push('\n');
    }
    report.push('\n');

    if let Some(last) = snapshots.last() {
        report.push_str("── FINAL STATE ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Levels Gained: {}\n",
            last.level.saturating_sub(start.level)
        ));
        report.push_str(&format!("  Skills:        {}\n", join_or_none(&last.skills_unlocked)));
        report.push_str(&format!(
            "  Features:      {}\n",
            join_or_none(&last.features_unlocked)
        ));
        report.push_str(&format!("  Milestones:    {}\n\n", join_or_none(&last.milestones)));
    }
}

fn combat_text(report: &mut String, action: &str, seed: Option<u64>, stats: &CombatStatistics) {
    report.push_str("                   COMBAT SIMULATION\n");
    report.push_str(RULE);
    report.push_str(&format!("  Action:              {}\n", action));
    report.push_str(&format!("  Trials:              {}\n", stats.trials));
    report.push_str(&seed_line(seed));
    report.push('\n');

    report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
    report.push_str(&format!(
        "  Hits / Misses:       {} / {}\n",
        stats.hits, stats.misses
    ));
    report.push_str(&format!("  Hit Rate:            {:.1}%\n", stats.hit_rate_pct));
    report.push_str(&format!("  Crit Rate:           {:.1}%\n", stats.crit_rate_pct));
    report.push_str(&format!("  Avg Damage:          {:.2}\n", stats.average_damage));
    report.push_str(&format!(
        "  Damage Range:        {} - {}\n\n",
        stats.min_damage, stats.max_damage
    ));

    let m = &stats.metrics;
    report.push_str("── EFFICIENCY ───────────────────────────────────────────────────\n");
    report.push_str(&format!("  DPS:                 {:.2}\n", m.dps));
    report.push_str(&format!(
        "  DPS (with crits):    {:.2} ({})\n",
        m.dps_with_crit,
        m.damage_tier.label()
    ));
    match m.resource_efficiency {
        Some(e) => report.push_str(&format!(
            "  Damage / Energy:     {:.2} ({})\n\n",
            e,
            m.efficiency_tier.label()
        )),
        None => report.push_str("  Damage / Energy:     n/a (free)\n\n"),
    }
}

fn loot_text(
    report: &mut String,
    table: &LootTable,
    seed: Option<u64>,
    stats: &LootStatistics,
    balance: &BalanceAnalysis,
) {
    report.push_str("                    LOOT ANALYSIS\n");
    report.push_str(RULE);
    report.push_str(&format!("  Table:               {}\n", table.display_name()));
    report.push_str(&format!("  Trials:              {}\n", stats.trials));
    report.push_str(&seed_line(seed));
    report.push('\n');

    report.push_str("── VALUE ────────────────────────────────────────────────────────\n");
    report.push_str(&format!("  Avg Value:           {:.1}\n", stats.average_value));
    report.push_str(&format!("  Median Value:        {}\n", stats.median_value));
    report.push_str(&format!("  Std Deviation:       {:.2}\n", stats.standard_deviation));
    report.push_str(&format!(
        "  Range:               {} - {}\n",
        stats.min_value, stats.max_value
    ));
    report.push_str(&format!("  Empty Rolls:         {:.1}%\n", stats.nothing_percentage));
    report.push_str(&format!(
        "  Avg Roll Time:       {:.4} ms\n\n",
        stats.average_roll_time
    ));

    report.push_str("── ENTRIES ──────────────────────────────────────────────────────\n");
    let total_weight: f64 = table.entries.iter().map(|e| e.weight.max(0.0)).sum();
    for (idx, entry) in table.entries.iter().enumerate() {
        let expected = if total_weight > 0.0 {
            entry.weight / total_weight * 100.0
        } else {
            0.0
        };
        let observed = stats.entry_frequencies.get(idx).copied().unwrap_or(0.0) * 100.0;
        let bar: String = "█".repeat((observed / 5.0) as usize);
        report.push_str(&format!(
            "  {:<18} {:>5.1}% (expected {:>5.1}%) {}\n",
            entry.item_name(),
            observed,
            expected,
            bar
        ));
    }
    report.push('\n');

    report.push_str("── RARITY ───────────────────────────────────────────────────────\n");
    for rarity in Rarity::all() {
        let count = stats.rarity_counts.get(&rarity).copied().unwrap_or(0);
        if count > 0 {
            report.push_str(&format!("  {:<10} {}\n", rarity.name(), count));
        }
    }
    report.push('\n');

    report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
    report.push_str(&format!("  Balance Score:   {}\n", balance.balance_score));
    report.push_str(&format!("  Rating:          {}\n", balance.rating));
    for warning in &balance.warnings {
        report.push_str(&format!("  ⚠️  {}\n", warning));
    }
    report.push('\n');
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}
