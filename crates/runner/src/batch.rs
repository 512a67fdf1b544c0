//! One-shot batch analysis

use log::{debug, info};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tradewatch_core::Trade;
use tradewatch_ports::AnalysisError;
use tradewatch_surveillance::{AnalyserConfig, ConfigError, LogReporter, SuspiciousTradeEngine};

use crate::loader::{self, LoadError};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Input files for one batch run
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub trades: PathBuf,
    pub orders: PathBuf,
    /// Optional analyser config; defaults apply when absent
    pub config: Option<PathBuf>,
}

/// Load inputs, analyse, and return the flagged trades
pub fn run_batch(input: &BatchInput) -> Result<Vec<Trade>, BatchError> {
    let config = match &input.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            AnalyserConfig::from_file(path)?
        }
        None => AnalyserConfig::default(),
    };
    debug!(
        "Analyser config: window={}m deviation={}%",
        config.window.num_minutes(),
        config.price_deviation_pct
    );

    let trades = loader::load_trades(&input.trades)?;
    let orders = loader::load_orders(&input.orders)?;
    info!("Loaded {} trades and {} orders", trades.len(), orders.len());

    let engine = SuspiciousTradeEngine::try_new(config, Arc::new(LogReporter::new()))?;
    Ok(engine.find_suspicious_trades(&trades, &orders)?)
}
