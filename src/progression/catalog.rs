//! Fixed skill catalog and feature table.
//!
//! Order is part of the contract: index `n` always names the same skill, so
//! a projection unlocks the same skills on every run.

pub const SKILL_CATALOG: [&str; 24] = [
    "Basic Strike",
    "Second Wind",
    "Keen Eye",
    "Power Attack",
    "Iron Skin",
    "Quick Step",
    "Mana Bolt",
    "Battle Cry",
    "Parry",
    "Meditation",
    "Cleave",
    "Shadow Step",
    "Arcane Shield",
    "Whirlwind",
    "Regeneration",
    "Chain Lightning",
    "Berserk",
    "Mana Surge",
    "Blink",
    "Execute",
    "Spell Weave",
    "Titan Grip",
    "Time Dilation",
    "Avatar Form",
];

/// Class features unlocked at fixed levels.
pub const FEATURE_TABLE: [(u32, &str); 6] = [
    (5, "Class Specialization"),
    (10, "Advanced Techniques"),
    (15, "Elite Abilities"),
    (20, "Master Skills"),
    (25, "Legendary Powers"),
    (30, "Transcendence"),
];

/// The first `floor(level * rate)` catalog skills.
pub fn skills_unlocked(level: u32, rate: f64) -> Vec<String> {
    let count = (level as f64 * rate).floor().max(0.0) as usize;
    SKILL_CATALOG
        .iter()
        .take(count)
        .map(|s| s.to_string())
        .collect()
}

/// Every feature whose threshold is at or below `level`.
pub fn features_unlocked(level: u32) -> Vec<String> {
    FEATURE_TABLE
        .iter()
        .filter(|(threshold, _)| *threshold <= level)
        .map(|(_, name)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_follow_catalog_order() {
        let skills = skills_unlocked(4, 0.5);
        assert_eq!(skills, vec!["Basic Strike", "Second Wind"]);
    }

    #[test]
    fn test_skills_floor_fractional_counts() {
        assert!(skills_unlocked(1, 0.5).is_empty());
        assert_eq!(skills_unlocked(3, 0.5).len(), 1);
    }

    #[test]
    fn test_skills_clamp_to_catalog() {
        assert_eq!(skills_unlocked(1000, 1.0).len(), SKILL_CATALOG.len());
    }

    #[test]
    fn test_features_by_threshold() {
        assert!(features_unlocked(4).is_empty());
        assert_eq!(features_unlocked(5), vec!["Class Specialization"]);
        assert_eq!(features_unlocked(14).len(), 2);
        assert_eq!(features_unlocked(99).len(), FEATURE_TABLE.len());
    }

    #[test]
    fn test_feature_thresholds_step_by_five() {
        for (i, (threshold, _)) in FEATURE_TABLE.iter().enumerate() {
            assert_eq!(*threshold, crate::constants::FEATURE_LEVEL_STEP * (i as u32 + 1));
        }
    }
}
