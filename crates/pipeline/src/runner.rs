use crate::artifact;
use crate::error::PipelineError;
use analytics::{ErrorRecord, MetricsAggregator, MetricsRecord};
use configuration::ConfigError;
use dataset::TableLoader;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

/// Version tag carried by an error artifact when the failure happens before
/// the configuration was validated.
const DEFAULT_VERSION: &str = "v1";

/// Orchestrates one full run: config -> seed -> data -> statistic ->
/// signals -> metrics -> artifact, with a single fail-fast edge from any
/// stage to the error artifact.
pub struct PipelineRunner {
    // --- Context ---
    input: PathBuf,
    config_path: PathBuf,
    output: PathBuf,
    /// Placeholder until the config is validated, then the config's value.
    version: String,
    // --- Components ---
    loader: Box<dyn TableLoader>,
    aggregator: MetricsAggregator,
    /// Seeded right after config validation. Present so any stochastic
    /// stage added later inherits the run's determinism; each runner owns
    /// its own generator, nothing leaks across runs.
    rng: Option<StdRng>,
}

impl PipelineRunner {
    pub fn new(
        input: PathBuf,
        config_path: PathBuf,
        output: PathBuf,
        loader: Box<dyn TableLoader>,
    ) -> Self {
        Self {
            input,
            config_path,
            output,
            version: DEFAULT_VERSION.to_string(),
            loader,
            aggregator: MetricsAggregator::new(),
            rng: None,
        }
    }

    /// Runs the pipeline and returns the process exit code: 0 on success,
    /// 1 on any handled failure.
    ///
    /// Exactly one output document is written in either case. The only
    /// error this returns is a failure to write the artifact itself, which
    /// is fatal rather than representable as a further document type.
    pub fn run(&mut self) -> Result<u8, PipelineError> {
        let started = Instant::now();
        info!("Job started");

        match self.execute(started) {
            Ok(record) => {
                artifact::write(&self.output, &record)?;
                info!("Metrics written to {}", self.output.display());

                println!("{}", serde_json::to_string_pretty(&record)?);
                info!("Job completed successfully in {}ms", record.latency_ms);
                Ok(0)
            }
            Err(err) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                error!("Pipeline failed: {err}");

                let record = ErrorRecord::new(self.version.clone(), err.to_string());
                artifact::write(&self.output, &record)?;
                info!("Job failed after {elapsed_ms}ms");
                Ok(1)
            }
        }
    }

    /// The happy path, stage by stage; the first error short-circuits back
    /// to `run` for the uniform error-artifact mapping.
    fn execute(&mut self, started: Instant) -> Result<MetricsRecord, PipelineError> {
        let config = configuration::load_config(&self.config_path)?;
        self.version = config.version.clone();

        self.apply_seed(config.seed)?;

        let table = self.loader.load(&self.input)?;

        let means = signals::rolling_mean(&table, config.window);
        info!("Rolling mean calculated with window={}", config.window);

        let series = signals::generate_signals(&table, &means);
        info!("Signals generated");

        // The clock stops before the final document is assembled, so the
        // recorded latency covers every computing stage.
        let elapsed_ms = started.elapsed().as_millis() as u64;
        Ok(self
            .aggregator
            .aggregate(&series, table.len(), &config, elapsed_ms))
    }

    /// Seeds the run's generator deterministically from the config, before
    /// any data is read.
    fn apply_seed(&mut self, seed: i64) -> Result<(), ConfigError> {
        let accepted = u64::try_from(seed).map_err(|_| ConfigError::SeedOutOfRange(seed))?;
        self.rng = Some(StdRng::seed_from_u64(accepted));
        info!("Random seed set to {seed}");
        Ok(())
    }

    /// The run's generator, once seeded. The seam for stochastic stages.
    pub fn rng(&mut self) -> Option<&mut StdRng> {
        self.rng.as_mut()
    }
}
