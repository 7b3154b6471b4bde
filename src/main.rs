use clap::Parser;
use configuration::logging;
use dataset::CsvTableLoader;
use pipeline::PipelineRunner;
use std::path::PathBuf;
use std::process::ExitCode;

/// One-shot batch pipeline: price series in, signal-rate metric out.
///
/// Reads a CSV price series and a YAML run configuration, computes a
/// trailing-window signal rate, and always leaves exactly one JSON result
/// document at the output path, success or failure.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file with at least a `close` column.
    #[arg(long)]
    input: PathBuf,

    /// Run configuration YAML file (`seed`, `window`, `version`).
    #[arg(long)]
    config: PathBuf,

    /// Path the result JSON document is written to.
    #[arg(long)]
    output: PathBuf,

    /// Log file path. Truncated at the start of each run.
    #[arg(long)]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The log sink must exist before anything worth logging happens. If it
    // cannot be opened there is no artifact contract yet; report and bail.
    let _guard = match logging::init(&cli.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialise logging at {}: {e}", cli.log_file.display());
            return ExitCode::FAILURE;
        }
    };

    let mut runner = PipelineRunner::new(
        cli.input,
        cli.config,
        cli.output,
        Box::new(CsvTableLoader),
    );

    match runner.run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // Only reachable when the artifact itself could not be written;
            // a handled pipeline failure still returns Ok(1) above.
            tracing::error!("Fatal: {e}");
            ExitCode::FAILURE
        }
    }
}
