use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    pub fn all() -> [Rarity; 5] {
        [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LootType {
    #[default]
    Item,
    Currency,
    Experience,
    Nothing,
}

/// Inclusive quantity range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

impl Default for QuantityRange {
    fn default() -> Self {
        Self { min: 1, max: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub loot_type: LootType,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub quantity: QuantityRange,
    pub weight: f64,
}

impl LootEntry {
    pub fn new(loot_type: LootType, rarity: Rarity, min: u32, max: u32, weight: f64) -> Self {
        Self {
            name: None,
            loot_type,
            rarity,
            quantity: QuantityRange { min, max },
            weight,
        }
    }

    pub fn nothing(weight: f64) -> Self {
        Self::new(LootType::Nothing, Rarity::Common, 0, 0, weight)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name given to items rolled from this entry.
    pub fn item_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match self.loot_type {
            LootType::Item => format!("{} Item", self.rarity.name()),
            LootType::Currency => "Gold".to_string(),
            LootType::Experience => "Experience Orb".to_string(),
            LootType::Nothing => "Nothing".to_string(),
        }
    }
}

/// Ordered list of weighted entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LootTable {
    #[serde(default)]
    pub name: Option<String>,
    pub entries: Vec<LootEntry>,
}

impl LootTable {
    pub fn new(entries: Vec<LootEntry>) -> Self {
        Self {
            name: None,
            entries,
        }
    }

    /// Sum of entry weights after checking every entry is well formed.
    ///
    /// Negative or non-finite weights and inverted quantity ranges are
    /// rejected. A zero total is not an error; the table is merely
    /// degenerate and rolls nothing.
    pub fn total_weight(&self) -> Result<f64> {
        let mut total = 0.0;
        for (idx, entry) in self.entries.iter().enumerate() {
            if !(entry.weight >= 0.0) || !entry.weight.is_finite() {
                return Err(SimError::InvalidArgument(format!(
                    "entry {idx} has invalid weight {}",
                    entry.weight
                )));
            }
            if entry.quantity.min > entry.quantity.max {
                return Err(SimError::InvalidArgument(format!(
                    "entry {idx} has quantity min {} above max {}",
                    entry.quantity.min, entry.quantity.max
                )));
            }
            total += entry.weight;
        }
        if !total.is_finite() {
            return Err(SimError::InvalidArgument(format!(
                "table weights sum to {total}"
            )));
        }
        Ok(total)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Table")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItem {
    pub name: String,
    pub quantity: u32,
    pub rarity: Rarity,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResult {
    pub items: Vec<GeneratedItem>,
    pub total_value: u64,
    /// Wall-clock time spent on the roll, in milliseconds.
    pub roll_time: f64,
    /// Index of the selected entry; `None` for a degenerate table.
    pub selected: Option<usize>,
}

impl RollResult {
    pub fn empty(roll_time: f64) -> Self {
        Self {
            items: Vec::new(),
            total_value: 0,
            roll_time,
            selected: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_weight_sums_entries() {
        let table = LootTable::new(vec![
            LootEntry::new(LootType::Item, Rarity::Rare, 1, 1, 3.0),
            LootEntry::nothing(7.0),
        ]);
        assert_eq!(table.total_weight().unwrap(), 10.0);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let table = LootTable::new(vec![LootEntry::nothing(-1.0)]);
        assert!(matches!(
            table.total_weight(),
            Err(SimError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_inverted_quantity_rejected() {
        let table = LootTable::new(vec![LootEntry::new(
            LootType::Currency,
            Rarity::Common,
            5,
            2,
            1.0,
        )]);
        assert!(matches!(
            table.total_weight(),
            Err(SimError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_overflowing_weight_sum_rejected() {
        let table = LootTable::new(vec![
            LootEntry::new(LootType::Item, Rarity::Common, 1, 1, 1e308),
            LootEntry::new(LootType::Item, Rarity::Rare, 1, 1, 1e308),
        ]);
        assert!(matches!(
            table.total_weight(),
            Err(SimError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_table_has_zero_weight() {
        assert_eq!(LootTable::default().total_weight().unwrap(), 0.0);
    }

    #[test]
    fn test_item_names() {
        assert_eq!(
            LootEntry::new(LootType::Item, Rarity::Epic, 1, 1, 1.0).item_name(),
            "Epic Item"
        );
        assert_eq!(
            LootEntry::new(LootType::Currency, Rarity::Common, 1, 9, 1.0).item_name(),
            "Gold"
        );
        assert_eq!(
            LootEntry::new(LootType::Item, Rarity::Rare, 1, 1, 1.0)
                .named("Moonblade")
                .item_name(),
            "Moonblade"
        );
    }

    #[test]
    fn test_entry_from_json() {
        let entry: LootEntry = serde_json::from_str(
            r#"{"type": "currency", "rarity": "uncommon", "quantity": {"min": 5, "max": 20}, "weight": 40}"#,
        )
        .unwrap();
        assert_eq!(entry.loot_type, LootType::Currency);
        assert_eq!(entry.rarity, Rarity::Uncommon);
        assert_eq!(entry.quantity, QuantityRange { min: 5, max: 20 });
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Legendary);
        assert_eq!(Rarity::all().len(), 5);
    }
}
