//! Catalog and episode data loader
//!
//! Fetches YAML payloads from a data location, which is either an HTTP(S)
//! base URL or a local directory. Episode `file` references are resolved
//! against the same base as the catalog.

use reqwest::Url;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Catalog, EpisodeData};

/// Catalog reference used when none is configured
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.yaml";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Loader error types
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unexpected status ({0})")]
    Status(u16),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid location: {0}")]
    Location(String),

    #[error("Invalid payload: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Schema violation: {0}")]
    Schema(String),
}

impl LoadError {
    /// The resource could not be retrieved at all
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LoadError::Status(_) | LoadError::Request(_) | LoadError::Io(_) | LoadError::Location(_)
        )
    }

    /// The resource was retrieved but is not a valid payload
    pub fn is_parse(&self) -> bool {
        !self.is_transport()
    }
}

// =============================================================================
// Location
// =============================================================================

/// Where payloads are fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(Url),
    Local(PathBuf),
}

impl Location {
    /// Parse a base location.
    ///
    /// `http://` and `https://` become remote bases, `file://` URLs and
    /// everything else are treated as local directories.
    pub fn parse(base: &str) -> Result<Self, LoadError> {
        let base = base.trim();
        if base.starts_with("http://") || base.starts_with("https://") {
            let mut url = Url::parse(base).map_err(|e| LoadError::Location(e.to_string()))?;
            // Joining against a base without a trailing slash drops its last segment
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            Ok(Location::Remote(url))
        } else if base.starts_with("file://") {
            let url = Url::parse(base).map_err(|e| LoadError::Location(e.to_string()))?;
            let path = url
                .to_file_path()
                .map_err(|_| LoadError::Location(format!("not a file path: {}", base)))?;
            Ok(Location::Local(path))
        } else if base.is_empty() {
            Ok(Location::Local(PathBuf::from(".")))
        } else {
            Ok(Location::Local(PathBuf::from(base)))
        }
    }

    /// Resolve a reference against this base
    pub fn resolve(&self, reference: &str) -> Result<Location, LoadError> {
        let reference = reference.trim();
        if reference.starts_with("http://") || reference.starts_with("https://") {
            let url = Url::parse(reference).map_err(|e| LoadError::Location(e.to_string()))?;
            return Ok(Location::Remote(url));
        }

        match self {
            Location::Remote(base) => base
                .join(reference)
                .map(Location::Remote)
                .map_err(|e| LoadError::Location(e.to_string())),
            Location::Local(dir) => Ok(Location::Local(dir.join(Path::new(reference)))),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Remote(url) => write!(f, "{}", url),
            Location::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// Loader for catalog and episode payloads
#[derive(Debug, Clone)]
pub struct DataClient {
    base: Location,
    catalog_path: String,
    client: reqwest::Client,
}

impl DataClient {
    /// Create a client for the given base location
    pub fn new(base: &str) -> Result<Self, LoadError> {
        Ok(Self {
            base: Location::parse(base)?,
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            client: build_http_client(DEFAULT_TIMEOUT),
        })
    }

    /// Override the catalog reference
    pub fn with_catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_http_client(timeout);
        self
    }

    /// Base location payloads are resolved against
    pub fn base(&self) -> &Location {
        &self.base
    }

    /// Catalog reference relative to the base
    pub fn catalog_path(&self) -> &str {
        &self.catalog_path
    }

    /// Fetch the raw text of a reference
    async fn fetch_text(&self, reference: &str) -> Result<String, LoadError> {
        let target = self.base.resolve(reference)?;
        debug!("fetching {}", target);

        match target {
            Location::Remote(url) => {
                let response = self.client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status(status.as_u16()));
                }
                Ok(response.text().await?)
            }
            Location::Local(path) => Ok(tokio::fs::read_to_string(path).await?),
        }
    }

    /// Fetch and parse a YAML payload
    async fn fetch<T: DeserializeOwned>(&self, reference: &str) -> Result<T, LoadError> {
        let body = self.fetch_text(reference).await?;
        Ok(serde_yaml::from_str(&body)?)
    }

    /// Load the catalog
    pub async fn load_catalog(&self) -> Result<Catalog, LoadError> {
        let catalog: Catalog = self.fetch(&self.catalog_path).await?;
        catalog.validate().map_err(LoadError::Schema)?;
        info!(
            dramas = catalog.dramas.len(),
            episodes = catalog.episode_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load one episode's data from its `file` reference
    pub async fn load_episode(&self, reference: &str) -> Result<EpisodeData, LoadError> {
        let data: EpisodeData = self.fetch(reference).await?;
        info!(reference, lines = data.items.len(), "episode loaded");
        Ok(data)
    }
}

fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}
