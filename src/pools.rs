//! # Candidate Pools
//! Partitioning of the raw inventory into per-slot pools and the seasonal /
//! rain narrowing applied before selection.
//!
//! Empty-fallback policy: a filter that matches nothing widens back to the
//! full category pool. A sparse wardrobe should still produce an outfit;
//! an empty seasonal match is a signal to relax, not an error.

use crate::category::{normalize_category, Slot};
use crate::season::Season;
use crate::wardrobe::ClothingItem;
use crate::waterproof::looks_waterproof;

/// Inventory split by normalized category. Items whose category does not
/// normalize (hats, accessories, typos) land in no pool at all.
#[derive(Debug, Default)]
pub struct SlotPools<'a> {
    pub tops: Vec<&'a ClothingItem>,
    pub bottoms: Vec<&'a ClothingItem>,
    pub shoes: Vec<&'a ClothingItem>,
}

impl<'a> SlotPools<'a> {
    pub fn partition(inventory: &'a [ClothingItem]) -> Self {
        let mut pools = SlotPools::default();
        for item in inventory {
            match normalize_category(item.category.as_deref()) {
                Some(Slot::Top) => pools.tops.push(item),
                Some(Slot::Bottom) => pools.bottoms.push(item),
                Some(Slot::Shoes) => pools.shoes.push(item),
                None => {}
            }
        }
        pools
    }
}

/// True when the item's tag list contains the season, case-insensitively.
/// An empty tag list never matches (no season affinity).
pub fn prefers_season(item: &ClothingItem, season: Season) -> bool {
    item.season
        .iter()
        .any(|tag| tag.trim().eq_ignore_ascii_case(season.as_str()))
}

/// Subset of the pool tagged for the season. May be empty; callers apply
/// the fallback via `seasonal_pool`.
pub fn filter_by_season<'a>(pool: &[&'a ClothingItem], season: Season) -> Vec<&'a ClothingItem> {
    pool.iter()
        .copied()
        .filter(|item| prefers_season(item, season))
        .collect()
}

/// Season filter with the empty-fallback policy applied.
pub fn seasonal_pool<'a>(pool: &[&'a ClothingItem], season: Season) -> Vec<&'a ClothingItem> {
    let seasonal = filter_by_season(pool, season);
    if seasonal.is_empty() {
        pool.to_vec()
    } else {
        seasonal
    }
}

/// Rain narrowing for the shoe slot: waterproof-looking candidates, with
/// the same empty-fallback policy as the season filter.
pub fn rain_pool<'a>(shoes: &[&'a ClothingItem]) -> Vec<&'a ClothingItem> {
    let waterproof: Vec<&ClothingItem> = shoes
        .iter()
        .copied()
        .filter(|item| looks_waterproof(item))
        .collect();
    if waterproof.is_empty() {
        shoes.to_vec()
    } else {
        waterproof
    }
}
