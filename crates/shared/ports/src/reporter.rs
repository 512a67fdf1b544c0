use tradewatch_core::{Order, SuspicionReason, Trade};

/// Port for diagnostic reporting
///
/// Advisory only: methods return nothing, so a reporter can never alter
/// the outcome of an analysis. Both methods default to no-ops.
pub trait SuspicionReporter: Send + Sync {
    /// Called once per opposite-side order that implicates a trade
    fn suspicious_order(&self, _trade: &Trade, _order: &Order, _reason: SuspicionReason) {}

    /// Called at the end of an analysis with the number of flagged trades
    fn analysis_complete(&self, _suspicious_trades: usize) {}

    /// Reporter name for debugging
    fn name(&self) -> &str {
        "SuspicionReporter"
    }
}
