use serde::{Deserialize, Serialize};

/// Which heuristic implicated a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuspicionReason {
    /// An opposite-side order was placed before the lookback window
    OutsidePermittedWindow,
    /// An opposite-side order is priced beyond the deviation threshold
    PriceDeviation,
}

impl std::fmt::Display for SuspicionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuspicionReason::OutsidePermittedWindow => write!(f, "outside permitted window"),
            SuspicionReason::PriceDeviation => write!(f, "price deviation"),
        }
    }
}
