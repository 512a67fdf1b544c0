//! Tradewatch Surveillance
//!
//! Flags potentially manipulative trades by comparing each executed trade
//! against resting orders on the opposite side of the book:
//!
//! - **Timing**: an opposite order placed before the lookback window
//!   (default 30 minutes) preceding the trade
//! - **Price deviation**: an opposite order priced at or beyond a fixed
//!   percentage (default 10%) from the trade price
//!
//! ## Architecture
//!
//! ```text
//! Trades ──┐
//!          ├──► SuspiciousTradeEngine ──► SurveillanceReport ──► Vec<Trade>
//! Orders ──┘          │
//!                     ├── predicates (timing, price)
//!                     └── SuspicionReporter (advisory, never alters results)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tradewatch_surveillance::{AnalyserConfig, SuspiciousTradeEngine};
//!
//! let engine = SuspiciousTradeEngine::new(AnalyserConfig::default());
//! let flagged = engine.find_suspicious_trades(&trades, &orders)?;
//! ```

pub mod config;
pub mod engine;
pub mod predicates;
pub mod report;
pub mod reporter;

// Re-export main types
pub use config::{AnalyserConfig, ConfigError};
pub use engine::SuspiciousTradeEngine;
pub use predicates::{is_price_suspicious, is_trade_before_permitted_window};
pub use report::{Finding, SurveillanceReport, SuspiciousTrade};
pub use reporter::{LogReporter, NoopReporter};
