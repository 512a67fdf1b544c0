//! Analyser configuration
//!
//! Loaded from JSON, for example:
//!
//! ```json
//! { "window_minutes": 30, "price_deviation_pct": "10" }
//! ```
//!
//! Missing fields fall back to the defaults.

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration for the suspicious trade engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyserConfig {
    /// Lookback window before a trade; older opposite orders are suspicious
    #[serde(rename = "window_minutes", with = "minutes")]
    pub window: Duration,
    /// Deviation from the trade price, in percent, at which an opposite
    /// order becomes suspicious (inclusive)
    pub price_deviation_pct: Decimal,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            window: Duration::minutes(30),
            price_deviation_pct: dec!(10),
        }
    }
}

impl AnalyserConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn with_price_deviation_pct(mut self, pct: Decimal) -> Self {
        self.price_deviation_pct = pct;
        self
    }

    /// Check the window is a non-negative whole number of minutes and the
    /// deviation lies in [0, 100)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window < Duration::zero() {
            return Err(ConfigError::Invalid(format!(
                "window must not be negative, got {} minutes",
                self.window.num_minutes()
            )));
        }
        if !minutes::is_whole(&self.window) {
            return Err(ConfigError::Invalid(format!(
                "window must be whole minutes, got {} seconds",
                self.window.num_seconds()
            )));
        }
        if self.price_deviation_pct < Decimal::ZERO || self.price_deviation_pct >= dec!(100) {
            return Err(ConfigError::Invalid(format!(
                "price_deviation_pct must be in [0, 100), got {}",
                self.price_deviation_pct
            )));
        }
        Ok(())
    }

    /// Multiplier applied to a SELL trade price (0.90 at 10%)
    pub fn sell_threshold_factor(&self) -> Decimal {
        Decimal::ONE - self.price_deviation_pct / dec!(100)
    }

    /// Multiplier applied to a BUY trade price (1.10 at 10%)
    pub fn buy_threshold_factor(&self) -> Decimal {
        Decimal::ONE + self.price_deviation_pct / dec!(100)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Window (de)serialised as whole minutes
mod minutes {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn is_whole(window: &Duration) -> bool {
        window.num_seconds() % 60 == 0 && window.subsec_nanos() == 0
    }

    pub fn serialize<S: Serializer>(window: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        if !is_whole(window) {
            return Err(serde::ser::Error::custom(format!(
                "window of {} seconds is not whole minutes",
                window.num_seconds()
            )));
        }
        serializer.serialize_i64(window.num_minutes())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let minutes = i64::deserialize(deserializer)?;
        Duration::try_minutes(minutes).ok_or_else(|| {
            serde::de::Error::custom(format!("window of {} minutes is out of range", minutes))
        })
    }
}
