use core_types::{PriceBar, WindowSeries};
use rust_decimal::Decimal;

/// Trailing arithmetic moving average aligned to each input row.
///
/// For row `i` (0-based) the value is the mean of the `close` values at
/// indices `[i - window + 1, i]` inclusive, present only once the window is
/// fully populated (`i >= window - 1`). Earlier rows get `None`: the
/// statistic is absent, not zero. No weighting, no look-ahead.
///
/// Maintained as a running sum, so one pass over the table regardless of
/// window size. Callers guarantee `window >= 1` (validated upstream).
pub fn rolling_mean(bars: &[PriceBar], window: usize) -> WindowSeries {
    debug_assert!(window >= 1);

    let mut out = Vec::with_capacity(bars.len());
    let mut sum = Decimal::ZERO;

    for (i, bar) in bars.iter().enumerate() {
        sum += bar.close;
        if i >= window {
            sum -= bars[i - window].close;
        }
        if i + 1 >= window {
            out.push(Some(sum / Decimal::from(window as u64)));
        } else {
            out.push(None);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bars(closes: &[Decimal]) -> Vec<PriceBar> {
        closes.iter().map(|c| PriceBar { close: *c }).collect()
    }

    #[test]
    fn mean_is_absent_until_window_fills() {
        let table = bars(&[dec!(1), dec!(2), dec!(3), dec!(4), dec!(5)]);
        let means = rolling_mean(&table, 3);
        assert_eq!(
            means,
            vec![
                None,
                None,
                Some(dec!(2)),
                Some(dec!(3)),
                Some(dec!(4)),
            ]
        );
    }

    #[test]
    fn output_is_aligned_with_input() {
        let table = bars(&[dec!(10), dec!(20)]);
        for window in 1..=4 {
            assert_eq!(rolling_mean(&table, window).len(), table.len());
        }
    }

    #[test]
    fn window_of_one_tracks_the_close() {
        let table = bars(&[dec!(1.5), dec!(2.5)]);
        let means = rolling_mean(&table, 1);
        assert_eq!(means, vec![Some(dec!(1.5)), Some(dec!(2.5))]);
    }

    #[test]
    fn window_larger_than_table_never_fills() {
        let table = bars(&[dec!(1), dec!(2), dec!(3), dec!(4), dec!(5)]);
        let means = rolling_mean(&table, 10);
        assert!(means.iter().all(Option::is_none));
        assert_eq!(means.len(), 5);
    }

    #[test]
    fn mean_is_exact_for_non_terminating_divisions() {
        // 1/3-style division stays a Decimal, not a binary float.
        let table = bars(&[dec!(1), dec!(1), dec!(2)]);
        let means = rolling_mean(&table, 3);
        let expected = (dec!(1) + dec!(1) + dec!(2)) / dec!(3);
        assert_eq!(means[2], Some(expected));
    }

    #[test]
    fn empty_table_yields_empty_series() {
        assert!(rolling_mean(&[], 3).is_empty());
    }
}
