//! Tradewatch Ports
//!
//! Port definitions (traits) for the tradewatch surveillance engine.
//! These define the boundaries between the comparison engine and its callers
//! and collaborators.

mod analyser;
mod error;
mod reporter;

pub use analyser::TradeAnalyser;
pub use error::{AnalysisError, AnalysisResult};
pub use reporter::SuspicionReporter;
