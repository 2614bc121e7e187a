//! Chapter-by-chapter progression projection.

use super::catalog::{features_unlocked, skills_unlocked};
use super::settings::ProgressionSettings;
use crate::character::{AttributeBlock, CharacterState};
use crate::constants::MAX_LEVEL_UPS_PER_CHAPTER;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Character state at the end of one chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionSnapshot {
    pub level: u32,
    pub chapter: u32,
    /// XP banked toward the next level after this chapter's level-ups.
    pub experience: f64,
    pub stats: AttributeBlock,
    pub skills_unlocked: Vec<String>,
    pub features_unlocked: Vec<String>,
    pub milestones: Vec<String>,
}

/// Projects `character` across `story_length` chapters.
///
/// Returns exactly `story_length` snapshots. Fully deterministic: the same
/// inputs always produce the same snapshots.
pub fn project(
    character: &CharacterState,
    story_length: u32,
    settings: &ProgressionSettings,
) -> Result<Vec<ProgressionSnapshot>> {
    if story_length < 1 {
        return Err(SimError::InvalidArgument(
            "story length must be at least 1 chapter".into(),
        ));
    }
    if !(character.experience >= 0.0) || !character.experience.is_finite() {
        return Err(SimError::InvalidArgument(format!(
            "starting experience must be a non-negative number, got {}",
            character.experience
        )));
    }
    settings.validate(character.level)?;
    let start_required = settings.leveling_curve.required_xp(character.level);
    if character.experience > start_required * MAX_LEVEL_UPS_PER_CHAPTER {
        return Err(SimError::InvalidArgument(format!(
            "starting experience {} is more than {} levels' worth at level {}",
            character.experience, MAX_LEVEL_UPS_PER_CHAPTER, character.level
        )));
    }

    let curve = settings.leveling_curve;
    let stat_gain = settings.stat_gain();
    let mut level = character.level;
    let mut experience = character.experience;
    let mut stats = character.stats();
    let mut achieved: HashSet<usize> = HashSet::new();
    let mut snapshots = Vec::with_capacity(story_length as usize);

    for chapter in 1..=story_length {
        experience += settings.experience_rate;

        let mut required = curve.required_xp(level);
        while required > 0.0 && experience >= required {
            experience -= required;
            level = level.checked_add(1).ok_or_else(|| {
                SimError::InvalidArgument(format!(
                    "character would level past {} in chapter {chapter}",
                    u32::MAX
                ))
            })?;
            stats = stats.grown(stat_gain, level);
            required = curve.required_xp(level);
            debug!(chapter, level, next_requirement = required, "level up");
        }

        let mut milestones = Vec::new();
        for (idx, milestone) in settings.custom_milestones.iter().enumerate() {
            if !milestone.is_triggered(level, chapter) {
                continue;
            }
            if settings.dedupe_milestones && !achieved.insert(idx) {
                continue;
            }
            milestones.push(milestone.name.clone());
        }

        snapshots.push(ProgressionSnapshot {
            level,
            chapter,
            experience,
            stats,
            skills_unlocked: skills_unlocked(level, settings.skill_unlock_rate),
            features_unlocked: features_unlocked(level),
            milestones,
        });
    }

    info!(
        chapters = story_length,
        start_level = character.level,
        final_level = level,
        curve = curve.name(),
        "progression projected"
    );

    Ok(snapshots)
}
