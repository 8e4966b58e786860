//! # Rain Suitability Heuristic
//! The data model has no structured "water-resistant" attribute, so rain
//! suitability is inferred from free-text fields. Substring matching over a
//! fixed bilingual keyword set; false positives and negatives are accepted.
//! Keep every caller behind `looks_waterproof` so a structured attribute can
//! replace this later without touching selection logic.

use crate::wardrobe::ClothingItem;

/// Material and care terms that suggest an item sheds water. Stems, not
/// whole words: "водонепроница" covers the inflected forms.
const WATERPROOF_HINTS: &[&str] = &["waterproof", "водонепроница", "резин", "leather", "rubber"];

/// True when any free-text field of the item contains a waterproof hint.
/// Absent fields are skipped; an item with no text never matches.
pub fn looks_waterproof(item: &ClothingItem) -> bool {
    let haystack = [
        item.condition.as_deref(),
        item.notes.as_deref(),
        item.material.as_deref(),
        item.name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase();

    WATERPROOF_HINTS.iter().any(|hint| haystack.contains(hint))
}
