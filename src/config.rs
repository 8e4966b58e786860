//! # Advisor Configuration
//! One tunable: the simulated advisor latency. Loaded from TOML with env
//! overrides; a missing config file silently falls back to defaults so the
//! library works out of the box in tests and embedded use.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_ADVISOR_CONFIG_PATH: &str = "config/advisor.toml";
/// Simulated round-trip to the remote advisor, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1000;

pub const ENV_ADVISOR_CONFIG_PATH: &str = "ADVISOR_CONFIG_PATH";
pub const ENV_ADVISOR_DELAY_MS: &str = "ADVISOR_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdvisorConfig {
    /// Artificial delay before a recommendation resolves. Models the
    /// network round-trip of a remote advisor; result-invariant.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl AdvisorConfig {
    /// No delay; the usual choice in tests and interactive previews.
    pub fn immediate() -> Self {
        Self { delay_ms: 0 }
    }

    /// Load from `ADVISOR_CONFIG_PATH` (or the default path), then apply
    /// env overrides. A missing file is not an error; a malformed one is.
    pub fn from_toml() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_ADVISOR_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ADVISOR_CONFIG_PATH));

        let mut config = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("read advisor config at {}", path.display()))?;
            let parsed: AdvisorConfig = toml::from_str(&raw)
                .with_context(|| format!("parse advisor config at {}", path.display()))?;
            info!(path = %path.display(), delay_ms = parsed.delay_ms, "advisor config loaded");
            parsed
        } else {
            AdvisorConfig::default()
        };

        if let Some(delay) = parse_delay_env(std::env::var(ENV_ADVISOR_DELAY_MS).ok()) {
            config.delay_ms = delay;
        }
        Ok(config)
    }
}

// parse optional integer env; ignore garbage rather than failing startup
fn parse_delay_env(raw: Option<String>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}
