use crate::records::MetricsRecord;
use configuration::RunConfig;
use core_types::SignalSeries;
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// A stateless calculator reducing a run's signal series to its summary
/// record.
#[derive(Debug, Default)]
pub struct MetricsAggregator {}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the success record for a completed run.
    ///
    /// `rows_processed` is the input row count; by the alignment invariant
    /// it equals the signal count, but the field means rows of input. An
    /// empty series would be an upstream invariant violation (the loader
    /// guarantees at least one row), so it is not defended against here.
    pub fn aggregate(
        &self,
        signals: &SignalSeries,
        rows_processed: usize,
        config: &RunConfig,
        latency_ms: u64,
    ) -> MetricsRecord {
        debug_assert!(!signals.is_empty());

        let hits: u64 = signals.iter().map(|s| u64::from(*s)).sum();
        let rate = Decimal::from(hits) / Decimal::from(signals.len() as u64);
        let rounded = rate.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
        // A 4-dp decimal in [0, 1] always converts.
        let value = rounded.to_f64().unwrap();

        tracing::info!(
            "Metrics: signal_rate={:.4}, rows_processed={}",
            value,
            rows_processed
        );

        MetricsRecord {
            version: config.version.clone(),
            rows_processed,
            metric: "signal_rate".to_string(),
            value,
            latency_ms,
            seed: config.seed,
            status: "success".to_string(),
        }
    }
}
