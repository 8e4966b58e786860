//! # Recommendation Engine
//! Pure, testable logic that maps `(inventory, weather, date)` →
//! [`Recommendation`]. No I/O beyond the simulated advisor latency.
//!
//! Four stages, run once per call: season inference, category partition,
//! per-slot candidate filtering, selection + rationale accumulation. Each
//! slot is handled independently; a slot with no items in its category is
//! simply skipped and the completeness bucket reflects it afterwards.

use chrono::NaiveDate;
use std::time::Duration;
use tracing::debug;

use crate::config::AdvisorConfig;
use crate::pools::{rain_pool, seasonal_pool, SlotPools};
use crate::recommendation::{OutfitSelection, Rationale, RationaleCode, Recommendation};
use crate::season::Season;
use crate::selector::{Selector, UniformSelector};
use crate::wardrobe::{ClothingItem, WeatherReading};
use crate::waterproof::looks_waterproof;

// Temperature bands (°C). Per-slot, not shared: tops layer in four steps,
// bottoms and shoes only care about the extremes.
const TOP_COLD_MAX_C: f64 = 0.0;
const TOP_COOL_MAX_C: f64 = 10.0;
const TOP_MILD_MAX_C: f64 = 20.0;
const BOTTOM_HOT_MIN_C: f64 = 22.0;
const BOTTOM_COLD_MAX_C: f64 = 5.0;
const SHOES_HOT_MIN_C: f64 = 20.0;

/// Stateless recommendation front-end; holds only configuration.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// Recommend an outfit with uniform random tie-breaking. Resolves
    /// after the configured simulated latency.
    pub async fn recommend(
        &self,
        inventory: &[ClothingItem],
        weather: WeatherReading,
        today: NaiveDate,
    ) -> Recommendation {
        let mut selector = UniformSelector::from_entropy();
        self.recommend_with(inventory, weather, today, &mut selector)
            .await
    }

    /// Same pipeline with an injected selector, for reproducible runs.
    pub async fn recommend_with(
        &self,
        inventory: &[ClothingItem],
        weather: WeatherReading,
        today: NaiveDate,
        selector: &mut dyn Selector,
    ) -> Recommendation {
        if self.config.delay_ms > 0 {
            // Emulates the remote advisor round-trip; result-invariant,
            // cancellation is the caller's concern (drop the future).
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        }
        compose(inventory, weather, today, selector)
    }
}

/// The synchronous composition itself. Referentially transparent for a
/// fixed selector state; never fails — sparse or empty inventories degrade
/// to partial/empty outcomes instead.
pub fn compose(
    inventory: &[ClothingItem],
    weather: WeatherReading,
    today: NaiveDate,
    selector: &mut dyn Selector,
) -> Recommendation {
    let season = Season::for_date(&today);
    let pools = SlotPools::partition(inventory);
    debug!(
        %season,
        tops = pools.tops.len(),
        bottoms = pools.bottoms.len(),
        shoes = pools.shoes.len(),
        temperature = weather.temperature,
        raining = weather.is_raining,
        "composing outfit"
    );

    let mut outfit = OutfitSelection::default();
    let mut fragments = Vec::new();

    if !pools.tops.is_empty() {
        let pool = seasonal_pool(&pools.tops, season);
        outfit.top = selector.pick(&pool).cloned();
        fragments.push(top_band(weather.temperature));
        if weather.is_raining && outfit.top.as_ref().is_some_and(looks_waterproof) {
            fragments.push(RationaleCode::WaterproofTop);
        }
    }

    if !pools.bottoms.is_empty() {
        let pool = seasonal_pool(&pools.bottoms, season);
        outfit.bottom = selector.pick(&pool).cloned();
        fragments.push(bottom_band(weather.temperature));
    }

    if !pools.shoes.is_empty() {
        // Rain overrides the season filter for shoes entirely.
        let pool = if weather.is_raining {
            fragments.push(RationaleCode::RainShoes);
            rain_pool(&pools.shoes)
        } else {
            fragments.push(if weather.temperature > SHOES_HOT_MIN_C {
                RationaleCode::HotShoes
            } else {
                RationaleCode::NormalShoes
            });
            seasonal_pool(&pools.shoes, season)
        };
        outfit.shoes = selector.pick(&pool).cloned();
    }

    let completeness = outfit.completeness();
    Recommendation {
        outfit,
        rationale: Rationale {
            date: today,
            season,
            temperature: weather.temperature,
            raining: weather.is_raining,
            fragments,
            completeness,
        },
    }
}

fn top_band(temperature: f64) -> RationaleCode {
    if temperature < TOP_COLD_MAX_C {
        RationaleCode::ColdTop
    } else if temperature < TOP_COOL_MAX_C {
        RationaleCode::CoolTop
    } else if temperature < TOP_MILD_MAX_C {
        RationaleCode::MildTop
    } else {
        RationaleCode::WarmTop
    }
}

fn bottom_band(temperature: f64) -> RationaleCode {
    if temperature > BOTTOM_HOT_MIN_C {
        RationaleCode::HotBottom
    } else if temperature < BOTTOM_COLD_MAX_C {
        RationaleCode::ColdBottom
    } else {
        RationaleCode::NormalBottom
    }
}
