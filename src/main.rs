use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tubesum::server;
use tubesum::{AppState, Cli, Commands, Config, SupportedLanguages};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "tubesum=debug"
    } else {
        "tubesum=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().await?;

    match cli.command {
        Commands::Serve { port } => {
            let state = AppState::from_config(&config)?;
            let port = port.unwrap_or(config.server.port);

            let handle = server::start(&config.server.host, port, state).await?;
            handle.wait().await?;
        }
        Commands::Config { show } => {
            if show {
                config.display();
            } else {
                println!("Edit the config file directly:");
                println!("  config.yaml in the working directory, or the platform config dir");
            }
        }
        Commands::Languages => {
            println!("Supported translation targets:");
            for (code, name) in SupportedLanguages::new().iter() {
                println!("  • {} ({})", name, code);
            }
        }
    }

    Ok(())
}
