//! Reporter adapters
//!
//! Implementations of the `SuspicionReporter` port.

use log::{info, warn};
use tradewatch_core::{Order, SuspicionReason, Trade};
use tradewatch_ports::SuspicionReporter;

/// Discards every event; the engine default
pub struct NoopReporter;

impl SuspicionReporter for NoopReporter {
    fn name(&self) -> &str {
        "NoopReporter"
    }
}

/// Emits events through the `log` facade
///
/// Suspicious pairs are logged at warn, the run summary at info.
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspicionReporter for LogReporter {
    fn suspicious_order(&self, trade: &Trade, order: &Order, reason: SuspicionReason) {
        warn!(
            "Suspicious order detected ({}): trade={} {:?}@{} order={} {:?}@{}",
            reason, trade.id, trade.side, trade.price, order.id, order.side, order.price
        );
    }

    fn analysis_complete(&self, suspicious_trades: usize) {
        info!("Suspicious trades found: {}", suspicious_trades);
    }

    fn name(&self) -> &str {
        "LogReporter"
    }
}
