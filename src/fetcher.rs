use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use reqwest::Client;
use url::Url;

/// Fetches raw page markup with a single GET; no retries, no caching
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher honouring the configured timeout and user agent
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Retrieves the document at `url`, failing on transport errors and non-2xx statuses
    pub async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        ::log::info!("Fetching {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            ::log::warn!("{} returned {}", url, status);
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
