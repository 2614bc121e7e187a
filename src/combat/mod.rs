//! Combat resolver: one action's outcome, Monte Carlo batches, and static
//! efficiency metrics.

pub mod batch;
pub mod metrics;
pub mod resolver;
pub mod types;

pub use batch::{simulate, CombatStatistics};
pub use metrics::{ActionMetrics, DamageTier, EfficiencyTier};
pub use resolver::{damage_reduction, resolve};
pub use types::{CombatAction, CombatOutcome, CombatStats, DamageType};
