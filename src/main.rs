//! festival-labels - Festival line-ups regrouped by record label
//!
//! Prints the label-grouped data as JSON or serves it over HTTP. The first
//! run fetches from the festivals API and writes a snapshot file; later runs
//! read the snapshot until it is deleted.

use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use festival_labels::cache::SnapshotCache;
use festival_labels::cli::{Cli, Command, Config};
use festival_labels::data::FestivalClient;
use festival_labels::observe::TracingObserver;
use festival_labels::server;
use festival_labels::service::FestivalService;

/// Sets up log output on stderr so stdout stays clean for `show`
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the service from `config` and runs the selected command
async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let observer = TracingObserver::shared();
    observer.info(&format!(
        "Starting festival-labels v{} (source {}, cache {})",
        env!("CARGO_PKG_VERSION"),
        config.source_url,
        config.cache_file.display()
    ));

    let client = match config.timeout {
        Some(timeout) => FestivalClient::with_timeout(&config.source_url, timeout, observer.clone())?,
        None => FestivalClient::new(&config.source_url, observer.clone()),
    };
    let service = FestivalService::new(client, SnapshotCache::new(&config.cache_file), observer);

    match config.command {
        Command::Show => {
            let labels = service.get_data().await?;
            println!("{}", serde_json::to_string_pretty(&labels)?);
        }
        Command::Serve { bind } => {
            server::run(bind, Arc::new(service)).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let result = match Config::from_cli(&cli) {
        Ok(config) => {
            init_tracing();
            run(config).await
        }
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
