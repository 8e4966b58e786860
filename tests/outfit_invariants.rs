// tests/outfit_invariants.rs
//
// Structural invariants that must hold for any inventory and weather:
// slot validity, fallback-on-empty, completeness/branch correlation.

use chrono::NaiveDate;
use wardrobe_advisor::{
    compose, normalize_category, ClothingItem, Completeness, Slot, UniformSelector, WeatherReading,
};

fn item(category: &str, seasons: &[&str]) -> ClothingItem {
    ClothingItem::new()
        .with_category(category)
        .with_seasons(seasons.iter().copied())
}

fn mixed_inventory() -> Vec<ClothingItem> {
    vec![
        item("top", &["summer"]),
        item("Tops", &["winter"]),
        item("верх", &[]),
        item("bottom", &["spring", "autumn"]),
        item("низ", &["winter"]),
        item("shoes", &["summer"]).with_material("canvas"),
        item("shoe", &["winter"]).with_material("leather"),
        item("hat", &["winter"]),
        ClothingItem::new(), // no category at all
    ]
}

#[test]
fn filled_slots_always_hold_items_of_their_own_category() {
    let inventory = mixed_inventory();
    let dates = [
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        NaiveDate::from_ymd_opt(2025, 4, 5).unwrap(),
        NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
        NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
    ];
    let weathers = [
        WeatherReading::dry(-10.0),
        WeatherReading::dry(7.0),
        WeatherReading::rainy(15.0),
        WeatherReading::dry(30.0),
    ];

    let mut selector = UniformSelector::seeded(99);
    for date in dates {
        for weather in weathers {
            let rec = compose(&inventory, weather, date, &mut selector);
            if let Some(top) = &rec.outfit.top {
                assert_eq!(normalize_category(top.category.as_deref()), Some(Slot::Top));
            }
            if let Some(bottom) = &rec.outfit.bottom {
                assert_eq!(
                    normalize_category(bottom.category.as_deref()),
                    Some(Slot::Bottom)
                );
            }
            if let Some(shoes) = &rec.outfit.shoes {
                assert_eq!(
                    normalize_category(shoes.category.as_deref()),
                    Some(Slot::Shoes)
                );
            }
        }
    }
}

#[test]
fn completeness_always_matches_filled_slot_count() {
    let inventories: Vec<Vec<ClothingItem>> = vec![
        vec![],
        vec![item("top", &[])],
        vec![item("top", &[]), item("shoes", &[])],
        mixed_inventory(),
    ];
    let expected = [
        Completeness::Empty,
        Completeness::Partial,
        Completeness::Partial,
        Completeness::Complete,
    ];

    let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let mut selector = UniformSelector::seeded(1);
    for (inventory, want) in inventories.iter().zip(expected) {
        let rec = compose(inventory, WeatherReading::dry(18.0), date, &mut selector);
        assert_eq!(rec.rationale.completeness, want);
        assert_eq!(
            rec.rationale.completeness,
            rec.outfit.completeness(),
            "rationale branch must agree with the outfit itself"
        );
    }
}

#[test]
fn a_category_with_items_is_never_left_empty_by_filtering() {
    // Every season tag mismatches, every shoe fails the rain heuristic:
    // the fallback policy must still fill all three slots.
    let inventory = vec![
        item("top", &["winter"]),
        item("bottom", &["winter"]),
        item("shoes", &["winter"]).with_material("canvas"),
    ];
    let july = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

    let mut selector = UniformSelector::seeded(3);
    let dry = compose(&inventory, WeatherReading::dry(25.0), july, &mut selector);
    assert_eq!(dry.rationale.completeness, Completeness::Complete);

    let wet = compose(&inventory, WeatherReading::rainy(25.0), july, &mut selector);
    assert_eq!(wet.rationale.completeness, Completeness::Complete);
}

#[test]
fn same_seed_reproduces_the_same_outfit() {
    let inventory = mixed_inventory();
    let date = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
    let weather = WeatherReading::dry(9.0);

    let mut a = UniformSelector::seeded(2024);
    let mut b = UniformSelector::seeded(2024);
    let rec_a = compose(&inventory, weather, date, &mut a);
    let rec_b = compose(&inventory, weather, date, &mut b);
    assert_eq!(rec_a, rec_b);
}
