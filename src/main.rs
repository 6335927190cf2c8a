// src/main.rs
use clap::Parser;
use ct_recon::cli::Cli;
use ct_recon::config::{Config, RunConfig};
use ct_recon::pipeline::Pipeline;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate arguments
    cli.validate()?;

    // Load config file, if any
    let config = match cli.config {
        Some(ref path) => Config::from_file(Path::new(path))?,
        None => Config::default(),
    };

    // Initialize logging
    let log_level = cli
        .log_level_override()
        .unwrap_or(config.logging.level.as_str());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let run_config = RunConfig::resolve(&cli, config);
    tracing::info!(
        "Starting ct-recon (format: {:?}, min time: {}, probe: {})",
        run_config.output_format,
        run_config.min_time.threshold(),
        run_config.probe_hosts
    );

    let pipeline = Pipeline::new(run_config)?;
    let mut stdout = std::io::stdout();
    let stats = pipeline.run(&mut stdout).await?;

    tracing::info!("{}", stats.format_stats());

    Ok(())
}
