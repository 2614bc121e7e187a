//! Integration test: Weighted loot rolls and balance analysis
//!
//! Covers entry selection, quantity generation, degenerate tables and the
//! batch statistics designers read off a loot report.

use litforge::loot::{analyze, roll, LootEntry, LootTable, LootType, Rarity};
use litforge::rng::SequenceSource;
use litforge::SimError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn chest() -> LootTable {
    LootTable {
        name: Some("Test Chest".into()),
        entries: vec![
            LootEntry::new(LootType::Currency, Rarity::Common, 5, 20, 50.0).named("Copper"),
            LootEntry::new(LootType::Item, Rarity::Rare, 1, 1, 30.0).named("Ember Ring"),
            LootEntry::nothing(20.0),
        ],
    }
}

// =========================================================================
// Single rolls
// =========================================================================

#[test]
fn test_single_entry_table_always_selects_it() {
    let table = LootTable::new(vec![LootEntry::new(
        LootType::Item,
        Rarity::Epic,
        1,
        1,
        5.0,
    )]);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..500 {
        let result = roll(&table, &mut rng).unwrap();
        assert_eq!(result.selected, Some(0));
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].rarity, Rarity::Epic);
    }
    let (stats, _) = analyze(&table, 1000, &mut rng).unwrap();
    assert_eq!(stats.nothing_percentage, 0.0);
}

#[test]
fn test_roll_picks_by_cumulative_weight() {
    // r = draw * 100: 0.1 -> Copper, 0.6 -> Ember Ring, 0.9 -> nothing
    let table = chest();

    let mut rng = SequenceSource::new(vec![0.6]);
    let ring = roll(&table, &mut rng).unwrap();
    assert_eq!(ring.selected, Some(1));
    assert_eq!(ring.items[0].name, "Ember Ring");
    assert_eq!(ring.total_value, 10);

    let mut rng = SequenceSource::new(vec![0.9]);
    let empty = roll(&table, &mut rng).unwrap();
    assert_eq!(empty.selected, Some(2));
    assert!(empty.is_empty());
    assert_eq!(empty.total_value, 0);
}

#[test]
fn test_currency_quantity_within_range() {
    let table = chest();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..1000 {
        let result = roll(&table, &mut rng).unwrap();
        if result.selected == Some(0) {
            let quantity = result.items[0].quantity;
            assert!((5..=20).contains(&quantity), "quantity {quantity} out of range");
            assert_eq!(result.total_value, quantity as u64 * 10);
        }
    }
}

#[test]
fn test_zero_weight_table_rolls_nothing() {
    let table = LootTable::new(vec![
        LootEntry::new(LootType::Item, Rarity::Legendary, 1, 1, 0.0),
        LootEntry::nothing(0.0),
    ]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let result = roll(&table, &mut rng).unwrap();
    assert!(result.items.is_empty());
    assert_eq!(result.selected, None);
}

#[test]
fn test_empty_table_rolls_nothing() {
    let mut rng = SequenceSource::constant(0.3);
    let result = roll(&LootTable::default(), &mut rng).unwrap();
    assert!(result.is_empty());
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_negative_weight_rejected() {
    let table = LootTable::new(vec![LootEntry::nothing(-1.0)]);
    let mut rng = SequenceSource::constant(0.3);
    assert!(matches!(
        roll(&table, &mut rng),
        Err(SimError::InvalidArgument(_))
    ));
}

// =========================================================================
// Batch analysis
// =========================================================================

#[test]
fn test_selection_frequencies_converge_to_weights() {
    let table = chest();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let (stats, balance) = analyze(&table, 20_000, &mut rng).unwrap();

    let expected = [0.5, 0.3, 0.2];
    let total: f64 = stats.entry_frequencies.iter().sum();
    assert!((total - 1.0).abs() < 1e-9, "every roll selects one entry");
    for (idx, (&observed, &want)) in stats.entry_frequencies.iter().zip(&expected).enumerate() {
        assert!(
            (observed - want).abs() < 0.015,
            "entry {idx}: observed {observed}, expected {want}"
        );
    }
    assert!((stats.nothing_percentage - 20.0).abs() < 1.5);
    assert_eq!(balance.balance_score, 75);
    assert!(balance.rating.starts_with("FAIR"));
}

#[test]
fn test_rarity_counts_track_items() {
    let table = chest();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let (stats, _) = analyze(&table, 2000, &mut rng).unwrap();
    let counted: u32 = stats.rarity_counts.values().sum();
    let non_empty = (2000.0 * (1.0 - stats.nothing_percentage / 100.0)).round() as u32;
    assert_eq!(counted, non_empty);
    assert!(!stats.rarity_counts.contains_key(&Rarity::Legendary));
}

#[test]
fn test_unreachable_entry_is_flagged() {
    let table = LootTable::new(vec![
        LootEntry::new(LootType::Item, Rarity::Common, 1, 1, 1.0),
        LootEntry::new(LootType::Item, Rarity::Legendary, 1, 1, 0.0).named("Crown"),
    ]);
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let (stats, balance) = analyze(&table, 300, &mut rng).unwrap();
    assert_eq!(stats.entry_frequencies[1], 0.0);
    assert_eq!(balance.balance_score, 85);
    assert!(balance.warnings.iter().any(|w| w.contains("Crown")));
}
