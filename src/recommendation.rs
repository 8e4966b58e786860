//! # Recommendation Output
//! The engine's result shape: the chosen outfit plus a structured rationale.
//!
//! The rationale is deliberately code-based rather than prose. Decision logic
//! must not compose locale-bound strings; it records *why* each slot was
//! chosen as tagged fragments plus the numeric context, and the presentation
//! layer (or the reference renderer in [`crate::render`]) formats them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::season::Season;
use crate::wardrobe::ClothingItem;

/// One explanation fragment, tied to a single slot decision. Appended in
/// slot order: top, optional waterproof-top extra, bottom, shoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RationaleCode {
    ColdTop,
    CoolTop,
    MildTop,
    WarmTop,
    WaterproofTop,
    HotBottom,
    ColdBottom,
    NormalBottom,
    RainShoes,
    HotShoes,
    NormalShoes,
}

/// How much of the outfit could be filled. Drives which reason branch the
/// renderer takes; must always agree with the actual slot count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completeness {
    /// No usable items in any category.
    Empty,
    /// One or two slots filled.
    Partial,
    /// All three slots filled.
    Complete,
}

/// Why this outfit: the per-slot fragments plus the context they were
/// decided under. Everything the presentation layer needs to render a
/// localized reason text, nothing pre-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rationale {
    pub date: NaiveDate,
    pub season: Season,
    /// Degrees Celsius, as supplied by the weather provider.
    pub temperature: f64,
    pub raining: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<RationaleCode>,
    pub completeness: Completeness,
}

/// Up to one item per slot. A slot stays empty when its category had no
/// items at all; a filled slot always holds an item of that category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutfitSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes: Option<ClothingItem>,
}

impl OutfitSelection {
    pub fn filled_slots(&self) -> usize {
        [
            self.top.is_some(),
            self.bottom.is_some(),
            self.shoes.is_some(),
        ]
        .iter()
        .filter(|filled| **filled)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_slots() == 0
    }

    /// The completeness bucket this selection falls into.
    pub fn completeness(&self) -> Completeness {
        match self.filled_slots() {
            0 => Completeness::Empty,
            3 => Completeness::Complete,
            _ => Completeness::Partial,
        }
    }
}

/// Full engine output: outfit plus explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub outfit: OutfitSelection,
    pub rationale: Rationale,
}

impl Recommendation {
    /// Reference English rendering of the rationale. Convenience for
    /// callers without their own localization; see [`crate::render`].
    pub fn reason_text(&self) -> String {
        crate::render::reason_text(&self.rationale)
    }
}
