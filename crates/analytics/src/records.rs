use serde::{Deserialize, Serialize};

/// Summary record emitted on a successful run.
///
/// Field order is the serialized order of the output document; keep it
/// stable, downstream consumers diff these files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub version: String,
    pub rows_processed: usize,
    /// Always `"signal_rate"`; names the metric `value` carries.
    pub metric: String,
    /// Mean of the signal series, rounded half away from zero to 4 dp.
    pub value: f64,
    pub latency_ms: u64,
    pub seed: i64,
    /// Always `"success"`.
    pub status: String,
}

/// Record emitted when any stage of the run fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub version: String,
    /// Always `"error"`.
    pub status: String,
    pub error_message: String,
}

impl ErrorRecord {
    pub fn new(version: String, error_message: String) -> Self {
        Self {
            version,
            status: "error".to_string(),
            error_message,
        }
    }
}
