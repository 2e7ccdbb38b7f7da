//! Reading the dashboard's dataset from a local file or over HTTP.
//!
//! Loading happens once at startup; the parsed `Dataset` is then shared
//! read-only by every request.

use crate::dataset::{Dataset, DatasetError};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Where the dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local CSV file
    File(PathBuf),
    /// CSV fetched over HTTP(S)
    Url(String),
}

impl DataSource {
    /// Interprets `http://` and `https://` locations as URLs, anything else as a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Configuration for the dataset loader
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig { timeout_seconds: 30 }
    }
}

/// Loads a dataset from a local file or a remote URL.
///
/// Used once at process start; the resulting `Dataset` is never reloaded.
#[derive(Debug)]
pub struct DatasetLoader {
    client: Client,
    config: LoaderConfig,
}

impl DatasetLoader {
    /// Creates a loader with default configuration.
    pub fn new() -> Result<Self, LoadError> {
        Self::with_config(LoaderConfig::default())
    }

    /// Creates a loader with custom configuration.
    ///
    /// # Returns
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: LoaderConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LoadError::ClientCreation(e.to_string()))?;

        Ok(DatasetLoader { client, config })
    }

    /// Reads and parses the dataset.
    ///
    /// # Errors
    /// Returns `LoadError` if the file cannot be read, the request fails or
    /// returns a non-success status, or the body is not a valid CSV table.
    pub async fn load(&self, source: &DataSource) -> Result<Dataset, LoadError> {
        log::info!("Loading dataset from {}", source);

        // Raw bytes: the CSV reader classifies invalid UTF-8 for both sources.
        let bytes = match source {
            DataSource::File(path) => tokio::fs::read(path)
                .await
                .map_err(|e| LoadError::Io(format!("{}: {}", path.display(), e)))?,
            DataSource::Url(url) => self.fetch(url).await?,
        };

        let dataset = Dataset::from_csv_reader(bytes.as_slice())?;

        log::info!(
            "Loaded {} rows with columns [{}]",
            dataset.row_count(),
            dataset.headers().join(", ")
        );

        Ok(dataset)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::ApiError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::NetworkError(e.to_string()))?;
        Ok(body.to_vec())
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}

/// Errors that can occur while loading the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// HTTP client creation failed
    ClientCreation(String),
    /// Local file could not be read
    Io(String),
    /// Network error occurred
    NetworkError(String),
    /// Server returned an error response
    ApiError(String),
    /// Body is not a usable table
    Dataset(DatasetError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::ClientCreation(msg) => write!(f, "Client creation error: {}", msg),
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LoadError::ApiError(msg) => write!(f, "API error: {}", msg),
            LoadError::Dataset(err) => write!(f, "Dataset error: {}", err),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<DatasetError> for LoadError {
    fn from(err: DatasetError) -> Self {
        LoadError::Dataset(err)
    }
}
