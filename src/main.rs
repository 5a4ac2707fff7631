use anyhow::Context;
use clap::Parser;
use configuration::{load_config, Overrides};
use database::PgConnector;
use prober::{run_probe, Console};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the dbprobe connectivity check.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load DATABASE_URL and friends from .env if there is one. It must happen
    // before parsing so clap's `env` fallback can see them.
    let dotenv = dotenvy::dotenv();

    // Logs go to stderr so they never interleave with the transcript on stdout.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())
        .context("Failed to load configuration")?
        .apply(cli.overrides);
    let database_url = config.database_url()?;

    let connector = PgConnector::new(database_url, config.connect_timeout());
    let mut console = Console::stdout();
    let summary = run_probe(&connector, &config, &mut console).await?;

    tracing::debug!(
        connected = summary.is_connected(),
        failed_probes = summary.failed_probes(),
        "Probe finished"
    );

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Checks that a PostgreSQL database is reachable, lists its tables, and
/// prints row counts for a few of them.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file (default: ./dbprobe.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}
