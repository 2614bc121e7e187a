use crate::constants::{
    BASE_ARMOR_CLASS, BASE_ATTRIBUTE_VALUE, HP_PER_CONSTITUTION, HP_PER_LEVEL,
    MANA_PER_INTELLIGENCE, MANA_PER_LEVEL, NUM_ATTRIBUTES,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Dexterity,
            AttributeType::Constitution,
            AttributeType::Intelligence,
            AttributeType::Wisdom,
            AttributeType::Charisma,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            AttributeType::Strength => "STR",
            AttributeType::Dexterity => "DEX",
            AttributeType::Constitution => "CON",
            AttributeType::Intelligence => "INT",
            AttributeType::Wisdom => "WIS",
            AttributeType::Charisma => "CHA",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Dexterity => 1,
            AttributeType::Constitution => 2,
            AttributeType::Intelligence => 3,
            AttributeType::Wisdom => 4,
            AttributeType::Charisma => 5,
        }
    }
}

/// The six base attributes.
///
/// Stored as an array indexed by [`AttributeType`]; on the wire each value
/// is a named field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "NamedAttributes", into = "NamedAttributes")]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

#[derive(Serialize, Deserialize)]
struct NamedAttributes {
    strength: u32,
    dexterity: u32,
    constitution: u32,
    intelligence: u32,
    wisdom: u32,
    charisma: u32,
}

impl From<NamedAttributes> for Attributes {
    fn from(n: NamedAttributes) -> Self {
        Self::from_values(
            n.strength,
            n.dexterity,
            n.constitution,
            n.intelligence,
            n.wisdom,
            n.charisma,
        )
    }
}

impl From<Attributes> for NamedAttributes {
    fn from(a: Attributes) -> Self {
        Self {
            strength: a.get(AttributeType::Strength),
            dexterity: a.get(AttributeType::Dexterity),
            constitution: a.get(AttributeType::Constitution),
            intelligence: a.get(AttributeType::Intelligence),
            wisdom: a.get(AttributeType::Wisdom),
            charisma: a.get(AttributeType::Charisma),
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            values: [BASE_ATTRIBUTE_VALUE; NUM_ATTRIBUTES],
        }
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: u32) {
        self.values[attr.index()] = value;
    }

    /// Adds `amount` to every attribute (one level-up's worth of growth).
    pub fn grow_all(&mut self, amount: u32) {
        for value in self.values.iter_mut() {
            *value = value.saturating_add(amount);
        }
    }

    pub fn from_values(str: u32, dex: u32, con: u32, int: u32, wis: u32, cha: u32) -> Self {
        Self {
            values: [str, dex, con, int, wis, cha],
        }
    }
}

/// Base attributes plus the values derived from them at a given level.
///
/// The derived fields are private and only ever computed by
/// [`AttributeBlock::at_level`]; deserializing recomputes them from the
/// base attributes and level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "BlockSeed", rename_all = "camelCase")]
pub struct AttributeBlock {
    #[serde(flatten)]
    base: Attributes,
    level: u32,
    hit_points: u32,
    mana_points: u32,
    armor_class: i32,
}

#[derive(Deserialize)]
struct BlockSeed {
    #[serde(flatten)]
    base: Attributes,
    level: u32,
}

impl From<BlockSeed> for AttributeBlock {
    fn from(seed: BlockSeed) -> Self {
        Self::at_level(seed.base, seed.level)
    }
}

impl AttributeBlock {
    pub fn at_level(base: Attributes, level: u32) -> Self {
        let con = base.get(AttributeType::Constitution) as i64;
        let int = base.get(AttributeType::Intelligence) as i64;
        let dex = base.get(AttributeType::Dexterity) as i64;
        let level_i = level as i64;

        let hit_points = (con * HP_PER_CONSTITUTION + level_i * HP_PER_LEVEL).max(1);
        let mana_points = (int * MANA_PER_INTELLIGENCE + level_i * MANA_PER_LEVEL).max(0);
        // Floors toward negative infinity so DEX 9 lands on AC 9.
        let armor_class = BASE_ARMOR_CLASS + (dex - BASE_ATTRIBUTE_VALUE as i64).div_euclid(2);

        Self {
            base,
            level,
            hit_points: hit_points.min(u32::MAX as i64) as u32,
            mana_points: mana_points.min(u32::MAX as i64) as u32,
            armor_class: armor_class as i32,
        }
    }

    /// Grows every base attribute by `amount` and recomputes at `level`.
    pub fn grown(&self, amount: u32, level: u32) -> Self {
        let mut base = self.base;
        base.grow_all(amount);
        Self::at_level(base, level)
    }

    pub fn base(&self) -> &Attributes {
        &self.base
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.base.get(attr)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    pub fn mana_points(&self) -> u32 {
        self.mana_points
    }

    pub fn armor_class(&self) -> i32 {
        self.armor_class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attributes() {
        let attrs = Attributes::new();
        for attr_type in AttributeType::all() {
            assert_eq!(attrs.get(attr_type), 10);
        }
    }

    #[test]
    fn test_get_set() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeType::Strength, 16);
        assert_eq!(attrs.get(AttributeType::Strength), 16);
        assert_eq!(attrs.get(AttributeType::Dexterity), 10);
    }

    #[test]
    fn test_grow_all_saturates() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeType::Wisdom, u32::MAX);
        attrs.grow_all(2);
        assert_eq!(attrs.get(AttributeType::Wisdom), u32::MAX);
        assert_eq!(attrs.get(AttributeType::Charisma), 12);
    }

    #[test]
    fn test_index_returns_unique_values() {
        let all = AttributeType::all();
        for (i, attr) in all.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn test_derived_values_at_level_one() {
        let block = AttributeBlock::at_level(Attributes::new(), 1);
        assert_eq!(block.hit_points(), 105); // 10*10 + 1*5
        assert_eq!(block.mana_points(), 83); // 10*8 + 1*3
        assert_eq!(block.armor_class(), 10);
    }

    #[test]
    fn test_hit_points_never_below_one() {
        let frail = Attributes::from_values(10, 10, 0, 0, 10, 10);
        let block = AttributeBlock::at_level(frail, 0);
        assert_eq!(block.hit_points(), 1);
        assert_eq!(block.mana_points(), 0);
    }

    #[test]
    fn test_armor_class_floors_below_ten() {
        let mut attrs = Attributes::new();

        attrs.set(AttributeType::Dexterity, 9);
        assert_eq!(AttributeBlock::at_level(attrs, 1).armor_class(), 9);

        attrs.set(AttributeType::Dexterity, 8);
        assert_eq!(AttributeBlock::at_level(attrs, 1).armor_class(), 9);

        attrs.set(AttributeType::Dexterity, 0);
        assert_eq!(AttributeBlock::at_level(attrs, 1).armor_class(), 5);

        attrs.set(AttributeType::Dexterity, 15);
        assert_eq!(AttributeBlock::at_level(attrs, 1).armor_class(), 12);
    }

    #[test]
    fn test_grown_recomputes_derived() {
        let block = AttributeBlock::at_level(Attributes::new(), 1);
        let next = block.grown(1, 2);
        assert_eq!(next.get(AttributeType::Constitution), 11);
        assert_eq!(next.hit_points(), 11 * 10 + 2 * 5);
        assert_eq!(next.level(), 2);
    }

    #[test]
    fn test_attributes_serialize_with_names() {
        let json = serde_json::to_value(Attributes::from_values(1, 2, 3, 4, 5, 6)).unwrap();
        assert_eq!(json["strength"], 1);
        assert_eq!(json["charisma"], 6);
    }

    #[test]
    fn test_deserialize_recomputes_stale_derived_values() {
        let json = r#"{
            "strength": 10, "dexterity": 14, "constitution": 12,
            "intelligence": 10, "wisdom": 10, "charisma": 10,
            "level": 3, "hitPoints": 9999, "manaPoints": 1, "armorClass": -4
        }"#;
        let block: AttributeBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.hit_points(), 12 * 10 + 3 * 5);
        assert_eq!(block.mana_points(), 10 * 8 + 3 * 3);
        assert_eq!(block.armor_class(), 12);
    }
}
