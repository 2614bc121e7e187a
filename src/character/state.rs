use super::attributes::{AttributeBlock, Attributes};
use crate::progression::ProgressionSnapshot;
use serde::{Deserialize, Serialize};

/// The character a projection starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterState {
    pub level: u32,
    /// Experience banked toward the next level.
    pub experience: f64,
    pub attributes: Attributes,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterState {
    /// A fresh level 1 character with every attribute at 10.
    pub fn new() -> Self {
        Self {
            level: 1,
            experience: 0.0,
            attributes: Attributes::new(),
        }
    }

    pub fn stats(&self) -> AttributeBlock {
        AttributeBlock::at_level(self.attributes, self.level)
    }

    /// Commits a previewed snapshot, returning the updated character.
    pub fn apply(&self, snapshot: &ProgressionSnapshot) -> Self {
        Self {
            level: snapshot.level,
            experience: snapshot.experience,
            attributes: *snapshot.stats.base(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::AttributeType;

    #[test]
    fn test_apply_takes_snapshot_values() {
        let mut grown = Attributes::new();
        grown.grow_all(2);
        let snapshot = ProgressionSnapshot {
            level: 3,
            chapter: 4,
            experience: 250.0,
            stats: AttributeBlock::at_level(grown, 3),
            skills_unlocked: Vec::new(),
            features_unlocked: Vec::new(),
            milestones: Vec::new(),
        };

        let applied = CharacterState::new().apply(&snapshot);
        assert_eq!(applied.level, 3);
        assert_eq!(applied.experience, 250.0);
        assert_eq!(applied.attributes.get(AttributeType::Strength), 12);
        assert_eq!(applied.stats(), snapshot.stats);
    }
}
