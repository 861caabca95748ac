//! Package popularity lookup
//!
//! Fetches aggregate usage data for a package from the go-search API. The
//! record is only displayed; nothing is computed from it.

use crate::dependency::repository_root;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

/// Default go-search API endpoint
pub const DEFAULT_STATS_ENDPOINT: &str = "http://go-search.org/api";

/// Stats lookup errors
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid stats endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Stats request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Stats service returned {status} for {package}")]
    UnexpectedStatus { package: String, status: u16 },

    #[error("Malformed stats response for {package}: {source}")]
    MalformedResponse {
        package: String,
        source: serde_json::Error,
    },
}

/// Usage record for a package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageStats {
    pub package: String,
    pub star_count: i64,
    pub imported: Vec<String>,
    pub static_rank: i64,
}

impl PackageStats {
    /// Number of packages importing this one
    pub fn imported_by(&self) -> usize {
        self.imported.len()
    }
}

/// Keyed lookup of package stats
pub trait StatsLookup {
    fn lookup(&self, package: &str) -> Result<PackageStats, LookupError>;
}

/// Reduce an import path to the repository-level key the service indexes
pub fn normalize_package_name(package: &str) -> &str {
    repository_root(package)
}

/// Blocking go-search client
pub struct GoSearchClient {
    client: Client,
    endpoint: String,
}

impl GoSearchClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn request_url(&self, id: &str) -> Result<Url, LookupError> {
        Url::parse_with_params(&self.endpoint, &[("action", "package"), ("id", id)]).map_err(
            |e| LookupError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: e.to_string(),
            },
        )
    }
}

impl StatsLookup for GoSearchClient {
    fn lookup(&self, package: &str) -> Result<PackageStats, LookupError> {
        let id = normalize_package_name(package);
        let url = self.request_url(id)?;
        debug!("Fetching package stats: {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                package: id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        trace!("Stats response body: {} bytes", body.len());

        serde_json::from_str(&body).map_err(|source| LookupError::MalformedResponse {
            package: id.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
