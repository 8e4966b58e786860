//! # Wardrobe Inputs
//! External entities the engine reads: clothing item metadata and a weather
//! reading. Both arrive by value from the calling layer (store/presentation);
//! the engine never mutates or persists them.
//!
//! Every metadata field is optional. The backing document store performs no
//! schema enforcement, so items routinely arrive with any subset of fields
//! missing — absent fields simply fail to match filters, they never error.

use serde::{Deserialize, Serialize};

/// One garment as stored by the wardrobe backend. Read-only to the engine;
/// only metadata fields participate in recommendation, `id` is carried
/// through untouched for the caller's benefit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form, possibly localized or pluralized ("Tops", "Обувь", ...).
    /// Must go through `normalize_category` before any slot logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Season tags as entered by the user; empty means "no season affinity"
    /// and never matches a seasonal filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ClothingItem {
    /// Empty item; fill in fields with the builder-style `with_*` helpers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_seasons<I, S>(mut self, seasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.season = seasons.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Snapshot from the external weather provider. Temperature is degrees
/// Celsius, unbounded; the provider has already reduced condition codes
/// to a single rain flag before the engine sees them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    #[serde(rename = "isRaining")]
    pub is_raining: bool,
}

impl WeatherReading {
    pub fn new(temperature: f64, is_raining: bool) -> Self {
        Self {
            temperature,
            is_raining,
        }
    }

    pub fn dry(temperature: f64) -> Self {
        Self::new(temperature, false)
    }

    pub fn rainy(temperature: f64) -> Self {
        Self::new(temperature, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_backend_document() {
        // The store hands over raw documents; only `category` is commonly set.
        let raw = r#"{"category":"Верх","createdAt":1699999999,"__v":0}"#;
        let item: ClothingItem = serde_json::from_str(raw).expect("sparse doc should parse");
        assert_eq!(item.category.as_deref(), Some("Верх"));
        assert!(item.season.is_empty());
        assert!(item.material.is_none());
    }

    #[test]
    fn weather_round_trips_with_wire_field_name() {
        let w = WeatherReading::rainy(3.5);
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"isRaining\":true"));
        let back: WeatherReading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
