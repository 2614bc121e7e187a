use crate::constants::{
    BASE_XP_REQUIREMENT, EXPONENTIAL_XP_GROWTH, LOGARITHMIC_XP_SCALE, MAX_LEVEL_UPS_PER_CHAPTER,
};
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

/// Maps a level to the XP needed to leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LevelingCurve {
    #[default]
    Linear,
    Exponential,
    Logarithmic,
}

impl LevelingCurve {
    /// XP required to advance from `level` to `level + 1`.
    ///
    /// - linear: `1000 * level`
    /// - exponential: `floor(1000 * 1.2^(level - 1))`
    /// - logarithmic: `floor(1000 * ln(level + 1) * 500)`
    pub fn required_xp(&self, level: u32) -> f64 {
        let level = level as f64;
        match self {
            LevelingCurve::Linear => BASE_XP_REQUIREMENT * level,
            LevelingCurve::Exponential => {
                (BASE_XP_REQUIREMENT * EXPONENTIAL_XP_GROWTH.powf(level - 1.0)).floor()
            }
            LevelingCurve::Logarithmic => {
                (BASE_XP_REQUIREMENT * (level + 1.0).ln() * LOGARITHMIC_XP_SCALE).floor()
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LevelingCurve::Linear => "linear",
            LevelingCurve::Exponential => "exponential",
            LevelingCurve::Logarithmic => "logarithmic",
        }
    }
}

/// A designer-authored story beat tied to a level or chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub name: String,
    #[serde(default)]
    pub trigger_level: Option<u32>,
    #[serde(default)]
    pub trigger_chapter: Option<u32>,
}

impl Milestone {
    /// True when either trigger is met. A milestone with no trigger never fires.
    pub fn is_triggered(&self, level: u32, chapter: u32) -> bool {
        self.trigger_level.is_some_and(|t| t <= level)
            || self.trigger_chapter.is_some_and(|t| t <= chapter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionSettings {
    /// XP granted per chapter.
    pub experience_rate: f64,
    #[serde(default)]
    pub leveling_curve: LevelingCurve,
    /// Multiplier on the +1 each attribute gains per level.
    pub stat_growth_rate: f64,
    /// Skills unlocked per level (fractional).
    pub skill_unlock_rate: f64,
    #[serde(default)]
    pub custom_milestones: Vec<Milestone>,
    /// Report each milestone only in the chapter it first triggers.
    #[serde(default)]
    pub dedupe_milestones: bool,
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            experience_rate: 500.0,
            leveling_curve: LevelingCurve::Linear,
            stat_growth_rate: 1.0,
            skill_unlock_rate: 0.5,
            custom_milestones: Vec::new(),
            dedupe_milestones: false,
        }
    }
}

impl ProgressionSettings {
    /// Attribute points each base attribute gains per level.
    pub fn stat_gain(&self) -> u32 {
        self.stat_growth_rate.round().max(0.0) as u32
    }

    /// Rejects settings that would stall or never terminate a projection
    /// starting at `start_level`.
    pub fn validate(&self, start_level: u32) -> Result<()> {
        if !(self.experience_rate > 0.0) || !self.experience_rate.is_finite() {
            return Err(SimError::InvalidSettings(format!(
                "experience rate must be a positive number, got {}",
                self.experience_rate
            )));
        }
        if !(self.stat_growth_rate > 0.0) || !self.stat_growth_rate.is_finite() {
            return Err(SimError::InvalidSettings(format!(
                "stat growth rate must be a positive number, got {}",
                self.stat_growth_rate
            )));
        }
        if !(self.skill_unlock_rate >= 0.0) || !self.skill_unlock_rate.is_finite() {
            return Err(SimError::InvalidSettings(format!(
                "skill unlock rate must not be negative, got {}",
                self.skill_unlock_rate
            )));
        }
        let required = self.leveling_curve.required_xp(start_level);
        if !(required > 0.0) {
            return Err(SimError::InvalidSettings(format!(
                "{} curve requires {} XP at level {}",
                self.leveling_curve.name(),
                required,
                start_level
            )));
        }
        // Curves only grow with level, so one chapter can never cost more
        // level-ups than this ratio (plus one for banked XP).
        if self.experience_rate > required * MAX_LEVEL_UPS_PER_CHAPTER {
            return Err(SimError::InvalidSettings(format!(
                "experience rate {} exceeds {} levels per chapter at level {} ({} XP per level)",
                self.experience_rate, MAX_LEVEL_UPS_PER_CHAPTER, start_level, required
            )));
        }
        Ok(())
    }
}
