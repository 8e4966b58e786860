//! # Category Normalizer
//! Maps free-form category labels to the canonical slot set {top, bottom,
//! shoes}. User-entered labels are bilingual and inconsistently pluralized
//! ("Tops", "Верх", "shoe"), so everything funnels through one synonym
//! table before slot logic runs.
//!
//! - Case-insensitive, whitespace-trimmed lookup.
//! - Unrecognized or absent labels → `None`; such items belong to no slot.
//! - Pure and total: never panics once the embedded table has loaded.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

static SYNONYMS: Lazy<HashMap<String, Slot>> = Lazy::new(|| {
    let raw = include_str!("category_synonyms.json");
    let table: HashMap<String, String> =
        serde_json::from_str(raw).expect("valid category synonym table");
    table
        .into_iter()
        .map(|(label, canonical)| {
            let slot = match canonical.as_str() {
                "top" => Slot::Top,
                "bottom" => Slot::Bottom,
                "shoes" => Slot::Shoes,
                other => panic!("unknown canonical category in synonym table: {other}"),
            };
            (label, slot)
        })
        .collect()
});

/// One of the three outfit positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Top,
    Bottom,
    Shoes,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Top => "top",
            Slot::Bottom => "bottom",
            Slot::Shoes => "shoes",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a raw category label to its canonical slot, or `None` when the
/// label is absent or not in the synonym table.
pub fn normalize_category(raw: Option<&str>) -> Option<Slot> {
    let label = raw?.trim().to_lowercase();
    SYNONYMS.get(&label).copied()
}
