//! JSON loading for trades and orders
//!
//! Both files hold a JSON array of records:
//!
//! ```json
//! [
//!   { "id": 1, "price": "100.0", "volume": 10.0, "side": "BUY",
//!     "timestamp": "2024-06-03T14:00:00Z" }
//! ]
//! ```
//!
//! Prices are best given as strings so they parse as exact decimals.
//! `timestamp` may be omitted; `price` may not.

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;
use tradewatch_core::{Order, Trade};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {kind}: {source}")]
    Parse {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Parse a JSON array of trades
pub fn trades_from_json(json: &str) -> Result<Vec<Trade>> {
    parse(json, "trades")
}

/// Parse a JSON array of orders
pub fn orders_from_json(json: &str) -> Result<Vec<Order>> {
    parse(json, "orders")
}

/// Load trades from a JSON file
pub fn load_trades(path: impl AsRef<Path>) -> Result<Vec<Trade>> {
    trades_from_json(&read(path.as_ref())?)
}

/// Load orders from a JSON file
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<Order>> {
    orders_from_json(&read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse<T: DeserializeOwned>(json: &str, kind: &'static str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse { kind, source })
}
