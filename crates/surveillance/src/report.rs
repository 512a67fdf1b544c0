//! Surveillance report
//!
//! Collects suspicious trades keyed on trade id, with every order that
//! implicated each one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tradewatch_core::{OrderId, SuspicionReason, Trade, TradeId};

/// One order implicating a trade, and why
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub order_id: OrderId,
    pub reason: SuspicionReason,
}

/// A flagged trade with its findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousTrade {
    pub trade: Trade,
    pub findings: Vec<Finding>,
}

impl SuspiciousTrade {
    /// Was this trade flagged for the given reason?
    pub fn flagged_for(&self, reason: SuspicionReason) -> bool {
        self.findings.iter().any(|f| f.reason == reason)
    }
}

/// Result of one analysis run
///
/// Each trade id appears once. Entries keep the order in which trades were
/// first flagged, but callers should treat the report as a set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SurveillanceReport {
    trades: Vec<SuspiciousTrade>,
    #[serde(skip)]
    index: HashMap<TradeId, usize>,
}

impl SurveillanceReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding; the first record seen for a trade id is kept
    pub fn record(&mut self, trade: &Trade, finding: Finding) {
        match self.index.get(&trade.id) {
            Some(&pos) => self.trades[pos].findings.push(finding),
            None => {
                self.index.insert(trade.id, self.trades.len());
                self.trades.push(SuspiciousTrade {
                    trade: trade.clone(),
                    findings: vec![finding],
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn contains(&self, trade_id: TradeId) -> bool {
        self.index.contains_key(&trade_id)
    }

    pub fn get(&self, trade_id: TradeId) -> Option<&SuspiciousTrade> {
        self.index.get(&trade_id).map(|&pos| &self.trades[pos])
    }

    pub fn trades(&self) -> &[SuspiciousTrade] {
        &self.trades
    }

    /// Flagged trade ids
    pub fn trade_ids(&self) -> Vec<TradeId> {
        self.trades.iter().map(|s| s.trade.id).collect()
    }

    /// Drop the findings and keep only the flagged trades
    pub fn into_trades(self) -> Vec<Trade> {
        self.trades.into_iter().map(|s| s.trade).collect()
    }
}
