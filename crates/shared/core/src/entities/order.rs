use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{OrderId, Price, Timestamp, Volume};

/// A resting order considered as a potential counter-signal to a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub price: Price,
    pub volume: Volume,
    pub side: Side,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

impl Order {
    /// Create a new order with explicit timestamp
    pub fn new(
        id: OrderId,
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

    /// Create an order with no timestamp (price-only checks)
    pub fn without_timestamp(id: OrderId, price: Price, volume: Volume, side: Side) -> Self {
        Self {
            id,
            price,
            volume,
            side,
            timestamp: None,
        }
    }

    /// True when this order rests on the other side of the book from `side`
    pub fn opposes(&self, side: Side) -> bool {
        self.side.is_opposite(side)
    }
}
