//! # Season Inferencer
//! Calendar month → canonical season. Northern-hemisphere mapping only;
//! the caller supplies the date explicitly so there is no hidden clock.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical season tag, matched case-insensitively against item tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Zero-based month (0 = January) → season. Table lookup, total:
    /// out-of-range input wraps modulo 12.
    pub fn from_month0(month0: u32) -> Season {
        match month0 % 12 {
            11 | 0 | 1 => Season::Winter,
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    /// Season for a calendar date (local calendar month of the caller).
    pub fn for_date(date: &NaiveDate) -> Season {
        Season::from_month0(date.month0())
    }

    /// Lowercase name, the form used in item season tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
