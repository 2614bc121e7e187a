// Character attributes
pub const BASE_ATTRIBUTE_VALUE: u32 = 10;
pub const NUM_ATTRIBUTES: usize = 6;

// Derived stats
pub const HP_PER_CONSTITUTION: i64 = 10;
pub const HP_PER_LEVEL: i64 = 5;
pub const MANA_PER_INTELLIGENCE: i64 = 8;
pub const MANA_PER_LEVEL: i64 = 3;
pub const BASE_ARMOR_CLASS: i64 = 10;

// XP and leveling
pub const BASE_XP_REQUIREMENT: f64 = 1000.0;
pub const EXPONENTIAL_XP_GROWTH: f64 = 1.2;
pub const LOGARITHMIC_XP_SCALE: f64 = 500.0;
pub const FEATURE_LEVEL_STEP: u32 = 5;
/// Cap on `experience_rate / required_xp(start_level)`; keeps level-ups per chapter bounded.
pub const MAX_LEVEL_UPS_PER_CHAPTER: f64 = 1000.0;

// Combat
pub const ATTACK_STAT_SCALING: f64 = 0.5;
pub const DEFENSE_CURVE_CONSTANT: f64 = 100.0;
pub const HIGH_DPS_THRESHOLD: f64 = 15.0;
pub const MEDIUM_DPS_THRESHOLD: f64 = 8.0;
pub const EFFICIENT_DAMAGE_PER_ENERGY: f64 = 2.0;
pub const BALANCED_DAMAGE_PER_ENERGY: f64 = 1.0;

// Loot
pub const LOOT_VALUE_PER_UNIT: u64 = 10;
pub const BALANCE_SCORE_BASE: i32 = 75;
pub const BALANCE_EMPTY_ROLL_PENALTY: i32 = 20;
pub const BALANCE_FULL_ROLL_BONUS: i32 = 10;
pub const HIGH_NOTHING_PERCENT: f64 = 50.0;
pub const LOW_NOTHING_PERCENT: f64 = 10.0;

// Batch runs
pub const DEFAULT_TRIALS: u32 = 1000;
