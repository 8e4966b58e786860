// src/lib.rs
// Public library surface for integration tests (and the embedding app).

pub mod category;
pub mod config;
pub mod engine;
pub mod pools;
pub mod recommendation;
pub mod render;
pub mod season;
pub mod selector;
pub mod wardrobe;
pub mod waterproof;

// ---- Re-exports for stable public API ----
pub use crate::category::{normalize_category, Slot};
pub use crate::config::AdvisorConfig;
pub use crate::engine::{compose, Advisor};
pub use crate::recommendation::{
    Completeness, OutfitSelection, Rationale, RationaleCode, Recommendation,
};
pub use crate::season::Season;
pub use crate::selector::{FirstSelector, Selector, UniformSelector};
pub use crate::wardrobe::{ClothingItem, WeatherReading};
pub use crate::waterproof::looks_waterproof;
