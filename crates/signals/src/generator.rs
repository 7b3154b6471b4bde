use core_types::{PriceBar, SignalSeries, WindowSeries};

/// Derives the binary indicator: 1 where the close strictly exceeds the
/// window statistic, 0 otherwise.
///
/// Rows whose statistic is absent collapse to 0 here, so in the output a
/// warm-up row is indistinguishable from a genuine no-signal row. That is
/// deliberate; absence is only meaningful upstream of this point.
pub fn generate_signals(bars: &[PriceBar], means: &WindowSeries) -> SignalSeries {
    bars.iter()
        .zip(means)
        .map(|(bar, mean)| match mean {
            Some(m) if bar.close > *m => 1,
            _ => 0,
        })
        .collect()
}
