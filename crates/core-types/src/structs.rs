use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the input price table.
///
/// Row order is time order and is significant: the trailing-window statistic
/// depends on it. Decoders map the required `close` column here; any other
/// columns in the source table are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub close: Decimal,
}

/// Trailing-window statistic aligned by index with the price table.
///
/// `None` marks rows with insufficient history (the first `window - 1`
/// rows). Absence stays distinguishable from a computed zero until the
/// signal generator deliberately collapses it.
pub type WindowSeries = Vec<Option<Decimal>>;

/// Binary 0/1 indicator per row, same length and alignment as the table.
pub type SignalSeries = Vec<u8>;
