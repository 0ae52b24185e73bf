//! Festival API client
//!
//! Fetches the festival list from the remote source. Failures never escape
//! [`FestivalSource::fetch`]: they are reported to the observer and the caller
//! receives an empty list.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::RawFestival;
use crate::observe::SharedObserver;

/// Default URL of the festivals API
pub const DEFAULT_SOURCE_URL: &str =
    "https://eacp.energyaustralia.com.au/codingtest/api/v1/festivals";

/// Errors that can occur while fetching festivals
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected response status: {0}")]
    BadStatus(reqwest::StatusCode),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),
}

/// Anything that can supply the raw festival list
#[async_trait]
pub trait FestivalSource: Send + Sync {
    /// Returns every festival the source knows about
    ///
    /// Returns an empty list if the source cannot be read.
    async fn fetch(&self) -> Vec<RawFestival>;
}

/// Client for the festivals HTTP API
#[derive(Clone)]
pub struct FestivalClient {
    client: Client,
    url: String,
    observer: SharedObserver,
}

impl FestivalClient {
    /// Creates a client for `url` with a default HTTP client
    pub fn new(url: impl Into<String>, observer: SharedObserver) -> Self {
        Self::with_client(Client::new(), url, observer)
    }

    /// Creates a client whose requests give up after `timeout`
    pub fn with_timeout(
        url: impl Into<String>,
        timeout: Duration,
        observer: SharedObserver,
    ) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url, observer))
    }

    /// Creates a client with a custom HTTP client
    pub fn with_client(client: Client, url: impl Into<String>, observer: SharedObserver) -> Self {
        Self {
            client,
            url: url.into(),
            observer,
        }
    }

    /// The URL this client reads from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs the request, surfacing every failure
    async fn fetch_from_api(&self) -> Result<Vec<RawFestival>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status));
        }

        let text = response.text().await?;
        let mut festivals: Vec<RawFestival> = serde_json::from_str(&text)?;
        for festival in &mut festivals {
            self.drop_unnamed_bands(festival);
        }
        Ok(festivals)
    }

    /// Removes bands that have no name, reporting each one
    ///
    /// A band cannot be grouped without a name, but the rest of the payload
    /// is still usable.
    fn drop_unnamed_bands(&self, festival: &mut RawFestival) {
        let observer = &self.observer;
        let festival_name = &festival.name;
        festival.bands.retain(|band| {
            if !band.name.is_empty() {
                return true;
            }
            let err = FetchError::MissingField(format!(
                "band name in festival '{}' (label '{}')",
                festival_name,
                band.label_name()
            ));
            observer.error("Skipping band without a name", &err);
            false
        });
    }
}

#[async_trait]
impl FestivalSource for FestivalClient {
    async fn fetch(&self) -> Vec<RawFestival> {
        match self.fetch_from_api().await {
            Ok(festivals) => {
                self.observer
                    .info(&format!("Fetched {} festivals from {}", festivals.len(), self.url));
                festivals
            }
            Err(e) => {
                self.observer.error("Error fetching data from API", &e);
                Vec::new()
            }
        }
    }
}
