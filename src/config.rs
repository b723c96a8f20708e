use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Configuration for fetching and extracting patent pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Scheme and host serving the patent pages; also the origin for root-relative links
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path segment placed between the base URL and a bare patent identifier
    #[serde(default = "default_patent_path")]
    pub patent_path: String,

    /// Request timeout in seconds (transport default when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with the request
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Default value for base_url
fn default_base_url() -> String {
    "https://patents.google.com".to_string()
}

/// Default value for patent_path
fn default_patent_path() -> String {
    "patent".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            patent_path: default_patent_path(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ScraperConfig {
    /// Create a configuration pointing at a different base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScrapeError::Config(e.to_string()))?;
        // Reject a bad base URL here rather than on the first fetch
        config.expected_host()?;
        Ok(config)
    }

    /// Host every fetched URL must reference
    pub fn expected_host(&self) -> Result<String, ScrapeError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| ScrapeError::Config(format!("base_url {}: {}", self.base_url, e)))?;
        base.host_str()
            .map(|h| h.to_string())
            .ok_or_else(|| ScrapeError::Config(format!("base_url {} has no host", self.base_url)))
    }

    /// Origin prefixed onto root-relative links
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
