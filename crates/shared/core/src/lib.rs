//! Tradewatch Core Domain
//!
//! Pure domain types for the tradewatch surveillance engine.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Order, Side, SuspicionReason, Trade};
pub use values::{OrderId, Price, Timestamp, TradeId, Volume};
