//! Tradewatch Runner - Batch Surveillance
//!
//! Feeds the suspicious trade engine from JSON files:
//!
//! - **Loader**: Reads trade and order arrays
//! - **Batch**: Loads inputs and config, runs one analysis
//!
//! ```text
//! trades.json ──┐
//! orders.json ──┼──► Loader ──► SuspiciousTradeEngine ──► flagged trades (JSON)
//! config.json ──┘                      │
//!                                      └──► LogReporter ──► env_logger
//! ```

pub mod batch;
pub mod loader;

// Re-export main types
pub use batch::{BatchError, BatchInput, run_batch};
pub use loader::{LoadError, load_orders, load_trades, orders_from_json, trades_from_json};
