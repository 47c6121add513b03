use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use feedgrab::config::JobConfig;
use feedgrab::error::EngineError;
use feedgrab::job;

/// Run one scrape job from its YAML config.
#[derive(Parser)]
#[command(name = "feedgrab", version, about)]
struct Cli {
    /// Path to the job config file.
    config: PathBuf,

    /// Directory the JSON artifacts are written into.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), EngineError> {
    let config = JobConfig::load(&cli.config)?;
    job::run(&config, &cli.output_dir)?;
    Ok(())
}
