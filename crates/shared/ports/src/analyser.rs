use tradewatch_core::{Order, Trade};

use crate::AnalysisResult;

/// Port for trade surveillance
///
/// Implementations compare every trade against the opposite-side orders and
/// return each implicated trade once. Result order carries no meaning.
pub trait TradeAnalyser: Send + Sync {
    fn find_suspicious_trades(
        &self,
        trades: &[Trade],
        orders: &[Order],
    ) -> AnalysisResult<Vec<Trade>>;
}
