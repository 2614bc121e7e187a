use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    #[default]
    Physical,
    Magical,
    Fire,
    Ice,
    Lightning,
    Poison,
    Holy,
    Shadow,
}

impl DamageType {
    /// Physical damage scales off attack and defense; every other type is in
    /// the magical family and uses magic power and magic defense.
    pub fn is_physical(&self) -> bool {
        matches!(self, DamageType::Physical)
    }
}

/// Combat-relevant stats of one combatant.
///
/// Accuracy, evasion, critical rate and critical damage are percentages with
/// no enforced upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombatStats {
    pub health: f64,
    pub energy: f64,
    pub attack: f64,
    pub defense: f64,
    pub magic_power: f64,
    pub magic_defense: f64,
    pub speed: f64,
    pub accuracy: f64,
    pub evasion: f64,
    pub critical_rate: f64,
    /// Crit damage as a percentage; 100 leaves the action multiplier as-is.
    pub critical_damage: f64,
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            health: 100.0,
            energy: 100.0,
            attack: 10.0,
            defense: 10.0,
            magic_power: 10.0,
            magic_defense: 10.0,
            speed: 10.0,
            accuracy: 0.0,
            evasion: 0.0,
            critical_rate: 0.0,
            critical_damage: 100.0,
        }
    }
}

/// A designer-authored ability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatAction {
    #[serde(default)]
    pub name: Option<String>,
    pub base_damage: f64,
    #[serde(default)]
    pub damage_type: DamageType,
    /// Base hit chance in percent.
    pub accuracy: f64,
    #[serde(default)]
    pub crit_chance: f64,
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    #[serde(default)]
    pub energy_cost: f64,
    /// Turns between uses.
    #[serde(default)]
    pub cooldown: f64,
}

fn default_crit_multiplier() -> f64 {
    2.0
}

impl CombatAction {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Action")
    }
}

/// Result of resolving one action.
///
/// Only `hit`, `damage` and `critical` are meant for downstream use; the rest
/// is diagnostics for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatOutcome {
    pub hit: bool,
    pub damage: u32,
    pub critical: bool,
    pub base_damage: f64,
    pub damage_reduction: f64,
    pub hit_chance: f64,
    pub crit_chance: f64,
}
