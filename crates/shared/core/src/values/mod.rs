use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - signed exact decimal, negative prices are valid
pub type Price = Decimal;

/// Volume value - carried on records but never used by suspicion logic
pub type Volume = f64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Identifier of an executed trade
pub type TradeId = i64;

/// Identifier of a resting order
pub type OrderId = i64;
