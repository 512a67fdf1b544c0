use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{Price, Timestamp, TradeId, Volume};

/// An executed trade under audit
///
/// The timestamp is optional so price-only checks can run on degenerate
/// records; only the timing heuristic reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub price: Price,
    pub volume: Volume,
    pub side: Side,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

impl Trade {
    /// Create a new trade with explicit timestamp
    pub fn new(
        id: TradeId,
        price: Price,
        volume: Volume,
        side: Side,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            price,
            volume,
            side,
            timestamp: Some(timestamp),
        }
    }

    /// Create a trade with no timestamp (price-only checks)
    pub fn without_timestamp(id: TradeId, price: Price, volume: Volume, side: Side) -> Self {
        Self {
            id,
            price,
            volume,
            side,
            timestamp: None,
        }
    }
}
