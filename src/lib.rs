// Re-export modules
pub mod config;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod parsers;
pub mod results;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{ExtractError, ScrapeError};
pub use results::{Assignees, Claim, Classification, Event, PatentRecord, SimilarDocument};

use fetcher::Fetcher;
use filter::UrlFilter;
use parsers::ExtractContext;

/// Main builder for scraping patent pages into records
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    config: ScraperConfig,
}

impl Scraper {
    /// Create a scraper with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self, ScrapeError> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, ScrapeError> {
        let config = ScraperConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = Some(timeout_seconds);
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Accepts a URL or bare patent identifier and returns the page URL to scrape
    pub fn canonical_url(&self, input: &str) -> Result<String, ScrapeError> {
        Ok(UrlFilter::new(&self.config)?.canonicalize(input)?.to_string())
    }

    /// Fetch the page at `url` and extract a record from it.
    ///
    /// The URL is checked against the configured host before any request is
    /// made. Fetch failures are errors; missing fields on the page are not.
    pub async fn scrape(&self, url: &str) -> Result<PatentRecord, ScrapeError> {
        let url = UrlFilter::new(&self.config)?.validate(url)?;
        let markup = Fetcher::new(&self.config)?.fetch(&url).await?;

        let context = ExtractContext::from_config(&self.config);
        Ok(parsers::parse(&markup, url.as_str(), &context))
    }
}

/// Scrape one patent page with the default configuration.
///
/// Returns `None` when the URL is rejected or the fetch fails; the cause is logged.
pub async fn scrape_patent(url: &str) -> Option<PatentRecord> {
    match Scraper::new().scrape(url).await {
        Ok(record) => Some(record),
        Err(e) => {
            ::log::error!("No record produced for {}: {}", url, e);
            None
        }
    }
}
