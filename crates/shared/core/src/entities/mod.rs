mod order;
mod side;
mod suspicion;
mod trade;

pub use order::Order;
pub use side::Side;
pub use suspicion::SuspicionReason;
pub use trade::Trade;
