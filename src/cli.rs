//! Command-line interface parsing for festival-labels
//!
//! This module handles parsing of CLI arguments using clap and resolves them,
//! together with their environment variable fallbacks, into a [`Config`].

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::cache::SnapshotCache;
use crate::data::DEFAULT_SOURCE_URL;

/// Default address for `serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Error types for resolving the configuration
#[derive(Debug, Error)]
pub enum CliError {
    /// No cache file was given and no default location could be determined
    #[error("Cannot determine a cache directory; pass --cache-file or set FESTIVALS_CACHE_FILE")]
    NoCacheDir,

    /// A timeout of zero seconds would fail every request
    #[error("Invalid timeout: must be at least 1 second")]
    ZeroTimeout,
}

/// festival-labels - Festival line-ups regrouped by record label
#[derive(Parser, Debug)]
#[command(name = "festival-labels")]
#[command(about = "Festival line-ups regrouped by record label")]
#[command(version)]
pub struct Cli {
    /// URL of the festivals API
    #[arg(long, env = "FESTIVALS_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Snapshot file holding the aggregated data
    ///
    /// Defaults to festivals.json in the user cache directory. Delete the
    /// file to force a fresh fetch.
    #[arg(long, env = "FESTIVALS_CACHE_FILE", value_name = "PATH")]
    pub cache_file: Option<PathBuf>,

    /// Give up on the festivals API after this many seconds
    #[arg(long, env = "FESTIVALS_TIMEOUT_SECS", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// What to do with the data
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the label-grouped data as JSON (default)
    Show,
    /// Serve the label-grouped data over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "FESTIVALS_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of the festivals API
    pub source_url: String,
    /// Location of the snapshot file
    pub cache_file: PathBuf,
    /// Optional request timeout for the festivals API
    pub timeout: Option<Duration>,
    /// Selected command
    pub command: Command,
}

impl Config {
    /// Creates a Config from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(Config)` with every value resolved
    /// * `Err(CliError)` if the cache location or timeout is unusable
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let cache_file = match &cli.cache_file {
            Some(path) => path.clone(),
            None => SnapshotCache::default_path().ok_or(CliError::NoCacheDir)?,
        };

        let timeout = match cli.timeout_secs {
            Some(0) => return Err(CliError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Config {
            source_url: cli.source_url.clone(),
            cache_file,
            timeout,
            command: cli.command.clone().unwrap_or(Command::Show),
        })
    }
}
