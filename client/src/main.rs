use clap::Parser;
use tracing_subscriber::EnvFilter;

use challenges_client::infrastructure::config::AppConfig;
use challenges_client::infrastructure::driving::{self, Cli};
use challenges_client::infrastructure::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    config.offline |= cli.offline;

    let state = AppState::from_config(&config)?;
    driving::run(cli.command, &state).await
}
