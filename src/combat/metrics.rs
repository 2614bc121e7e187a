//! Static efficiency metrics computed straight from an action definition.
//!
//! No randomness is involved. The labels are hints for designers and never
//! feed back into combat resolution.

use super::types::CombatAction;
use crate::constants::{
    BALANCED_DAMAGE_PER_ENERGY, EFFICIENT_DAMAGE_PER_ENERGY, HIGH_DPS_THRESHOLD,
    MEDIUM_DPS_THRESHOLD,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageTier {
    Low,
    Medium,
    High,
}

impl DamageTier {
    /// `high` above 15 crit-adjusted DPS, `medium` above 8, else `low`.
    pub fn from_dps(dps_with_crit: f64) -> Self {
        if dps_with_crit > HIGH_DPS_THRESHOLD {
            DamageTier::High
        } else if dps_with_crit > MEDIUM_DPS_THRESHOLD {
            DamageTier::Medium
        } else {
            DamageTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DamageTier::Low => "low",
            DamageTier::Medium => "medium",
            DamageTier::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyTier {
    /// No energy cost.
    Free,
    Costly,
    Balanced,
    Efficient,
}

impl EfficiencyTier {
    /// `efficient` above 2 damage per energy, `balanced` above 1, else `costly`.
    pub fn from_efficiency(resource_efficiency: Option<f64>) -> Self {
        match resource_efficiency {
            None => EfficiencyTier::Free,
            Some(e) if e > EFFICIENT_DAMAGE_PER_ENERGY => EfficiencyTier::Efficient,
            Some(e) if e > BALANCED_DAMAGE_PER_ENERGY => EfficiencyTier::Balanced,
            Some(_) => EfficiencyTier::Costly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyTier::Free => "free",
            EfficiencyTier::Costly => "costly",
            EfficiencyTier::Balanced => "balanced",
            EfficiencyTier::Efficient => "efficient",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionMetrics {
    pub dps: f64,
    pub dps_with_crit: f64,
    /// Damage per point of energy; `None` when the action costs nothing.
    pub resource_efficiency: Option<f64>,
    pub damage_tier: DamageTier,
    pub efficiency_tier: EfficiencyTier,
}

impl ActionMetrics {
    pub fn from_action(action: &CombatAction) -> Self {
        let dps = action.base_damage / (action.cooldown + 1.0);
        let dps_with_crit =
            dps * (1.0 + action.crit_chance / 100.0 * (action.crit_multiplier - 1.0));
        let resource_efficiency = if action.energy_cost > 0.0 {
            Some(action.base_damage / action.energy_cost)
        } else {
            None
        };

        Self {
            dps,
            dps_with_crit,
            resource_efficiency,
            damage_tier: DamageTier::from_dps(dps_with_crit),
            efficiency_tier: EfficiencyTier::from_efficiency(resource_efficiency),
        }
    }
}
