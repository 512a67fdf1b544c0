//! Suspicion predicates
//!
//! Each predicate compares a single trade against a single order and is
//! safe to call with same-side pairs.

use chrono::Duration;
use rust_decimal::Decimal;
use tradewatch_core::{Order, Side, Trade};
use tradewatch_ports::{AnalysisError, AnalysisResult};

use crate::config::AnalyserConfig;

/// True iff the order was placed strictly before `trade.timestamp - window`.
///
/// An order exactly on the boundary is not flagged. Both timestamps are
/// required; an absent one is rejected rather than guessed.
pub fn is_trade_before_permitted_window(
    trade: &Trade,
    order: &Order,
    window: Duration,
) -> AnalysisResult<bool> {
    let trade_time = trade
        .timestamp
        .ok_or(AnalysisError::TradeMissingTimestamp { trade_id: trade.id })?;
    let order_time = order
        .timestamp
        .ok_or(AnalysisError::OrderMissingTimestamp { order_id: order.id })?;

    // Boundary below the representable range: nothing can precede it
    let Some(boundary) = trade_time.checked_sub_signed(window) else {
        return Ok(false);
    };

    Ok(order_time < boundary)
}

/// True iff an opposite-side order is priced at or beyond the deviation
/// threshold from the trade price.
///
/// SELL trades compare against `price * sell_factor` (0.90 by default),
/// BUY trades against `price * buy_factor` (1.10 by default). For negative
/// order prices the comparison direction flips. A threshold outside the
/// decimal range is rejected.
pub fn is_price_suspicious(
    trade: &Trade,
    order: &Order,
    config: &AnalyserConfig,
) -> AnalysisResult<bool> {
    let order_price = order.price;
    let overflow = AnalysisError::PriceOverflow { trade_id: trade.id };

    let suspicious = match trade.side {
        Side::Sell => {
            // Opposite side must be BUY
            if order.side == Side::Sell {
                return Ok(false);
            }

            let threshold = trade
                .price
                .checked_mul(config.sell_threshold_factor())
                .ok_or(overflow)?;
            if order_price >= Decimal::ZERO {
                order_price <= threshold
            } else {
                order_price >= threshold
            }
        }
        Side::Buy => {
            // Opposite side must be SELL
            if order.side == Side::Buy {
                return Ok(false);
            }

            let threshold = trade
                .price
                .checked_mul(config.buy_threshold_factor())
                .ok_or(overflow)?;
            if order_price >= Decimal::ZERO {
                order_price >= threshold
            } else {
                order_price <= threshold
            }
        }
    };

    Ok(suspicious)
}
