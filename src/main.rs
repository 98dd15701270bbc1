//! Segment Router static server.
//!
//! Serves a route table described in a TOML file. Each route answers with a
//! configured status, headers and body.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use segment_router::config::{build_router, load_config, route_table, ConfigError};
use segment_router::observability::init_logging;
use segment_router::HttpServer;

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Serve a static route table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the route table
    Serve {
        #[arg(short, long)]
        config: PathBuf,

        /// Override the configured bind address
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Validate a configuration file
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the compiled route table as JSON
    Inspect {
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, bind } => {
            let mut config = load_config(&config)?;
            if let Some(bind) = bind {
                config.listener.bind_address = bind;
            }

            init_logging(&config.observability.log_level);
            tracing::info!("segment-router v{} starting", env!("CARGO_PKG_VERSION"));

            let router = build_router(&config)?;
            tracing::info!(
                bind_address = %config.listener.bind_address,
                routes = config.routes.len(),
                mounts = config.mounts.len(),
                "Configuration loaded"
            );

            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            HttpServer::new(router).run(listener).await?;

            tracing::info!("Shutdown complete");
        }
        Commands::Check { config } => match load_config(&config) {
            Ok(_) => println!("{}: ok", config.display()),
            Err(ConfigError::Validation(errors)) => {
                for error in &errors {
                    eprintln!("{}: {}", config.display(), error);
                }
                return Err(format!("{} validation error(s)", errors.len()).into());
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Inspect { config } => {
            let config = load_config(&config)?;
            let table = route_table(&config)?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
    }

    Ok(())
}
