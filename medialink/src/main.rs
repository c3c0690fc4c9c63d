mod server;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use medialink_core::{logging, Config};

#[derive(Debug, Parser)]
#[command(name = "medialink", about = "Alias-based streaming media proxy")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "MEDIALINK_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // 2. Validate configuration (fail fast on misconfigurations)
    if let Err(errors) = config.validate() {
        for e in &errors {
            eprintln!("Config validation error: {e}");
        }
        return Err(anyhow::anyhow!(
            "Configuration validation failed with {} error(s)",
            errors.len()
        ));
    }

    // 3. Initialize logging
    logging::init_logging(&config.logging)?;
    info!("MediaLink server starting...");
    info!("HTTP address: {}", config.http_address());
    info!(
        "Indirect hosts: {}",
        config.resolver.indirect_hosts.join(", ")
    );

    // 4. Start serving
    server::run(config).await
}
