//! Single-action combat math.
//!
//! These pure functions resolve one action without side effects; all
//! randomness comes from the caller's [`RandomSource`].

use super::types::{CombatAction, CombatOutcome, CombatStats};
use crate::constants::{ATTACK_STAT_SCALING, DEFENSE_CURVE_CONSTANT};
use crate::rng::RandomSource;

/// Fraction of damage blocked by a defense stat.
///
/// Diminishing returns: `defense / (defense + 100)`, always in `[0, 1)`.
/// Negative defense counts as zero.
pub fn damage_reduction(defense: f64) -> f64 {
    let defense = defense.max(0.0);
    defense / (defense + DEFENSE_CURVE_CONSTANT)
}

/// Raw damage before defense: action damage plus half the attacker's
/// offensive stat for the action's damage type.
pub fn base_damage(action: &CombatAction, attacker: &CombatStats) -> f64 {
    let offense = if action.damage_type.is_physical() {
        attacker.attack
    } else {
        attacker.magic_power
    };
    action.base_damage + ATTACK_STAT_SCALING * offense
}

/// Defense stat the action is checked against.
pub fn defense_against(action: &CombatAction, defender: &CombatStats) -> f64 {
    if action.damage_type.is_physical() {
        defender.defense
    } else {
        defender.magic_defense
    }
}

/// Roll against a percentage chance (0-100+).
///
/// # Arguments
/// * `chance_percent` - Chance of success; values above 100 always succeed
/// * `rng` - Random source
///
/// # Returns
/// true if the uniform draw on `[0, 100)` lands below the chance
pub fn roll_percent<R: RandomSource + ?Sized>(chance_percent: f64, rng: &mut R) -> bool {
    rng.percent() < chance_percent
}

/// Resolve one use of `action` by `attacker` against `defender`.
///
/// Draws once for the hit and, only on a hit, once more for the crit.
pub fn resolve<R: RandomSource + ?Sized>(
    action: &CombatAction,
    attacker: &CombatStats,
    defender: &CombatStats,
    rng: &mut R,
) -> CombatOutcome {
    let base = base_damage(action, attacker);
    let reduction = damage_reduction(defense_against(action, defender));
    let mut final_damage = base * (1.0 - reduction);

    let hit_chance = action.accuracy + attacker.accuracy - defender.evasion;
    let crit_chance = action.crit_chance + attacker.critical_rate;

    if !roll_percent(hit_chance, rng) {
        return CombatOutcome {
            hit: false,
            damage: 0,
            critical: false,
            base_damage: base,
            damage_reduction: reduction,
            hit_chance,
            crit_chance,
        };
    }

    let critical = roll_percent(crit_chance, rng);
    if critical {
        final_damage *= action.crit_multiplier * (attacker.critical_damage / 100.0);
    }

    CombatOutcome {
        hit: true,
        damage: final_damage.round().max(0.0) as u32,
        critical,
        base_damage: base,
        damage_reduction: reduction,
        hit_chance,
        crit_chance,
    }
}
