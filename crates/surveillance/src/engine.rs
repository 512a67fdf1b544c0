//! Suspicious Trade Engine
//!
//! Compares every trade against every opposite-side order using:
//! - a timing check (order placed before the lookback window)
//! - a price-deviation check (order priced beyond the threshold)
//!
//! A trade implicated by any order, for either reason, is flagged once.

use std::sync::Arc;

use tradewatch_core::{Order, SuspicionReason, Trade};
use tradewatch_ports::{AnalysisResult, SuspicionReporter, TradeAnalyser};

use crate::config::{AnalyserConfig, ConfigError};
use crate::predicates;
use crate::report::{Finding, SurveillanceReport};
use crate::reporter::NoopReporter;

/// Pure, synchronous trade/order comparison engine
///
/// Holds only its configuration and reporter; nothing is retained between
/// calls, so one engine can serve concurrent callers.
pub struct SuspiciousTradeEngine {
    config: AnalyserConfig,
    reporter: Arc<dyn SuspicionReporter>,
}

impl SuspiciousTradeEngine {
    /// Create an engine that reports nothing
    pub fn new(config: AnalyserConfig) -> Self {
        Self::with_reporter(config, Arc::new(NoopReporter))
    }

    /// Create an engine with a diagnostic reporter
    pub fn with_reporter(config: AnalyserConfig, reporter: Arc<dyn SuspicionReporter>) -> Self {
        Self { config, reporter }
    }

    /// Validate the configuration before building the engine
    pub fn try_new(
        config: AnalyserConfig,
        reporter: Arc<dyn SuspicionReporter>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_reporter(config, reporter))
    }

    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    /// Timing check with the configured window
    pub fn is_trade_before_permitted_window(
        &self,
        trade: &Trade,
        order: &Order,
    ) -> AnalysisResult<bool> {
        predicates::is_trade_before_permitted_window(trade, order, self.config.window)
    }

    /// Price check with the configured deviation
    pub fn is_price_suspicious(&self, trade: &Trade, order: &Order) -> AnalysisResult<bool> {
        predicates::is_price_suspicious(trade, order, &self.config)
    }

    /// Run both checks over the trade x order cross-product
    ///
    /// Both checks run for every opposite-side pair, so a missing timestamp
    /// fails the whole call regardless of prices. No partial report is
    /// returned on error.
    pub fn analyse(
        &self,
        trades: &[Trade],
        orders: &[Order],
    ) -> AnalysisResult<SurveillanceReport> {
        let mut report = SurveillanceReport::new();

        for trade in trades {
            for order in orders.iter().filter(|o| o.opposes(trade.side)) {
                if self.is_trade_before_permitted_window(trade, order)? {
                    let reason = SuspicionReason::OutsidePermittedWindow;
                    self.flag(&mut report, trade, order, reason);
                }
                if self.is_price_suspicious(trade, order)? {
                    self.flag(&mut report, trade, order, SuspicionReason::PriceDeviation);
                }
            }
        }

        self.reporter.analysis_complete(report.len());
        Ok(report)
    }

    /// Trades implicated by at least one opposite-side order, each once
    pub fn find_suspicious_trades(
        &self,
        trades: &[Trade],
        orders: &[Order],
    ) -> AnalysisResult<Vec<Trade>> {
        Ok(self.analyse(trades, orders)?.into_trades())
    }

    fn flag(
        &self,
        report: &mut SurveillanceReport,
        trade: &Trade,
        order: &Order,
        reason: SuspicionReason,
    ) {
        self.reporter.suspicious_order(trade, order, reason);
        report.record(
            trade,
            Finding {
                order_id: order.id,
                reason,
            },
        );
    }
}

impl Default for SuspiciousTradeEngine {
    fn default() -> Self {
        Self::new(AnalyserConfig::default())
    }
}

impl TradeAnalyser for SuspiciousTradeEngine {
    fn find_suspicious_trades(
        &self,
        trades: &[Trade],
        orders: &[Order],
    ) -> AnalysisResult<Vec<Trade>> {
        SuspiciousTradeEngine::find_suspicious_trades(self, trades, orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;
    use tradewatch_core::{Side, Timestamp};
    use tradewatch_ports::AnalysisError;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap()
    }

    fn trade(id: i64, side: Side, price: Decimal) -> Trade {
        Trade::new(id, price, 10.0, side, now())
    }

    fn order(id: i64, side: Side, price: Decimal, minutes_before: i64) -> Order {
        Order::new(id, price, 5.0, side, now() - Duration::minutes(minutes_before))
    }

    /// Records every event for assertions
    #[derive(Default)]
    struct RecordingReporter {
        events: Mutex<Vec<(i64, i64, SuspicionReason)>>,
        completed: Mutex<Vec<usize>>,
    }

    impl SuspicionReporter for RecordingReporter {
        fn suspicious_order(&self, trade: &Trade, order: &Order, reason: SuspicionReason) {
            self.events.lock().unwrap().push((trade.id, order.id, reason));
        }

        fn analysis_complete(&self, suspicious_trades: usize) {
            self.completed.lock().unwrap().push(suspicious_trades);
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![trade(1, Side::Buy, dec!(100.0))];
        let orders = vec![
            order(1, Side::Sell, dec!(105.0), 20),
            order(1, Side::Sell, dec!(120.0), 20),
            order(3, Side::Buy, dec!(90.0), 40),
        ];

        let report = engine.analyse(&trades, &orders).unwrap();

        assert_eq!(report.len(), 1);
        let entry = report.get(1).unwrap();
        assert_eq!(entry.findings.len(), 1);
        assert!(entry.flagged_for(SuspicionReason::PriceDeviation));
        assert!(!entry.flagged_for(SuspicionReason::OutsidePermittedWindow));
    }

    #[test]
    fn test_empty_inputs() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![trade(1, Side::Buy, dec!(100.0))];
        let orders = vec![order(1, Side::Sell, dec!(200.0), 60)];

        assert!(engine.find_suspicious_trades(&[], &[]).unwrap().is_empty());
        assert!(engine.find_suspicious_trades(&trades, &[]).unwrap().is_empty());
        assert!(engine.find_suspicious_trades(&[], &orders).unwrap().is_empty());
    }

    #[test]
    fn test_same_side_orders_never_flag() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![
            trade(1, Side::Buy, dec!(100.0)),
            trade(2, Side::Sell, dec!(100.0)),
        ];
        // Far outside the window and far off price, but same side as the trade
        let buy_orders = vec![order(10, Side::Buy, dec!(500.0), 120)];
        let sell_orders = vec![order(11, Side::Sell, dec!(1.0), 120)];

        let flagged = engine.find_suspicious_trades(&trades[..1], &buy_orders).unwrap();
        assert!(flagged.is_empty());
        let flagged = engine.find_suspicious_trades(&trades[1..], &sell_orders).unwrap();
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_trade_implicated_many_times_appears_once() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![trade(1, Side::Buy, dec!(100.0))];
        let orders = vec![
            // both checks fire
            order(10, Side::Sell, dec!(150.0), 45),
            // timing only
            order(11, Side::Sell, dec!(101.0), 60),
            // price only
            order(12, Side::Sell, dec!(110.0), 5),
        ];

        let report = engine.analyse(&trades, &orders).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.get(1).unwrap().findings.len(), 4);

        let flagged = engine.find_suspicious_trades(&trades, &orders).unwrap();
        assert_eq!(flagged, trades);
    }

    #[test]
    fn test_timing_alone_flags_trade() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![trade(1, Side::Sell, dec!(100.0))];
        let orders = vec![order(10, Side::Buy, dec!(99.0), 31)];

        let report = engine.analyse(&trades, &orders).unwrap();
        assert!(report.get(1).unwrap().flagged_for(SuspicionReason::OutsidePermittedWindow));
        assert!(!report.get(1).unwrap().flagged_for(SuspicionReason::PriceDeviation));
    }

    #[test]
    fn test_order_exactly_at_window_boundary_not_flagged() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![trade(1, Side::Buy, dec!(100.0))];
        let orders = vec![order(10, Side::Sell, dec!(100.0), 30)];

        assert!(engine.find_suspicious_trades(&trades, &orders).unwrap().is_empty());
    }

    #[test]
    fn test_distinct_trade_ids_are_reported_separately() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![
            trade(1, Side::Buy, dec!(100.0)),
            trade(2, Side::Buy, dec!(100.0)),
        ];
        let orders = vec![order(10, Side::Sell, dec!(120.0), 0)];

        let report = engine.analyse(&trades, &orders).unwrap();
        assert_eq!(report.trade_ids(), vec![1, 2]);
    }

    #[test]
    fn test_idempotent() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![
            trade(1, Side::Buy, dec!(100.0)),
            trade(2, Side::Sell, dec!(-100.0)),
            trade(3, Side::Sell, dec!(50.0)),
        ];
        let orders = vec![
            order(10, Side::Sell, dec!(112.0), 10),
            order(11, Side::Buy, dec!(-90.0), 10),
            order(12, Side::Buy, dec!(49.0), 10),
        ];

        let first = engine.analyse(&trades, &orders).unwrap();
        let second = engine.analyse(&trades, &orders).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.trade_ids(), vec![1, 2]);
    }

    #[test]
    fn test_custom_config() {
        let config = AnalyserConfig::default()
            .with_window(Duration::minutes(5))
            .with_price_deviation_pct(dec!(1));
        let engine = SuspiciousTradeEngine::new(config);
        let trades = vec![trade(1, Side::Buy, dec!(100.0))];

        let orders = vec![order(10, Side::Sell, dec!(100.5), 6)];
        let report = engine.analyse(&trades, &orders).unwrap();
        assert!(report.get(1).unwrap().flagged_for(SuspicionReason::OutsidePermittedWindow));

        let orders = vec![order(10, Side::Sell, dec!(101.0), 1)];
        let report = engine.analyse(&trades, &orders).unwrap();
        assert!(report.get(1).unwrap().flagged_for(SuspicionReason::PriceDeviation));
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let config = AnalyserConfig::default().with_price_deviation_pct(dec!(150));
        let result = SuspiciousTradeEngine::try_new(config, Arc::new(NoopReporter));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_timestamp_fails_whole_call() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![
            trade(1, Side::Buy, dec!(100.0)),
            Trade::without_timestamp(2, dec!(100.0), 1.0, Side::Buy),
        ];
        let orders = vec![order(10, Side::Sell, dec!(130.0), 0)];

        let err = engine.find_suspicious_trades(&trades, &orders).unwrap_err();
        assert_eq!(err, AnalysisError::TradeMissingTimestamp { trade_id: 2 });
    }

    #[test]
    fn test_price_overflow_fails_whole_call() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![
            trade(1, Side::Buy, dec!(100.0)),
            trade(2, Side::Buy, Decimal::MAX),
        ];
        let orders = vec![order(10, Side::Sell, dec!(1.0), 0)];

        let err = engine.find_suspicious_trades(&trades, &orders).unwrap_err();
        assert_eq!(err, AnalysisError::PriceOverflow { trade_id: 2 });
    }

    #[test]
    fn test_missing_timestamp_without_opposite_orders_is_fine() {
        let engine = SuspiciousTradeEngine::default();
        let trades = vec![Trade::without_timestamp(2, dec!(100.0), 1.0, Side::Buy)];
        let orders = vec![Order::without_timestamp(10, dec!(130.0), 1.0, Side::Buy)];

        assert!(engine.find_suspicious_trades(&trades, &orders).unwrap().is_empty());
    }

    #[test]
    fn test_reporter_receives_events() {
        let reporter = Arc::new(RecordingReporter::default());
        let engine =
            SuspiciousTradeEngine::with_reporter(AnalyserConfig::default(), reporter.clone());
        let trades = vec![trade(1, Side::Buy, dec!(100.0))];
        let orders = vec![
            order(10, Side::Sell, dec!(120.0), 40),
            order(11, Side::Sell, dec!(100.0), 10),
        ];

        let report = engine.analyse(&trades, &orders).unwrap();

        let events = reporter.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                (1, 10, SuspicionReason::OutsidePermittedWindow),
                (1, 10, SuspicionReason::PriceDeviation),
            ]
        );
        assert_eq!(*reporter.completed.lock().unwrap(), vec![1]);

        // Same result without a reporter
        let silent = SuspiciousTradeEngine::default();
        assert_eq!(silent.analyse(&trades, &orders).unwrap(), report);
    }

    #[test]
    fn test_usable_through_port() {
        let analyser: Box<dyn TradeAnalyser> = Box::new(SuspiciousTradeEngine::default());
        let trades = vec![trade(1, Side::Sell, dec!(100.0))];
        let orders = vec![order(10, Side::Buy, dec!(90.0), 0)];

        assert_eq!(analyser.find_suspicious_trades(&trades, &orders).unwrap().len(), 1);
    }
}
