use thiserror::Error;
use tradewatch_core::{OrderId, TradeId};

/// Invalid-input errors raised while comparing trades against orders
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid input: trade {trade_id} has no timestamp")]
    TradeMissingTimestamp { trade_id: TradeId },

    #[error("Invalid input: order {order_id} has no timestamp")]
    OrderMissingTimestamp { order_id: OrderId },

    #[error("Invalid input: price threshold for trade {trade_id} overflows")]
    PriceOverflow { trade_id: TradeId },
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
