use thiserror::Error;

/// Errors that stop a scrape before any record is produced
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// URL or identifier does not point at the expected patent host
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level failure while fetching the page
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl ScrapeError {
    /// Whether the error came from the fetch itself (as opposed to rejected input)
    pub fn is_fetch(&self) -> bool {
        matches!(self, ScrapeError::Fetch(_) | ScrapeError::Status { .. })
    }
}

/// Failure to extract a single field; contained by the extractor and only logged
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("{field}: no element matches {marker}")]
    MissingMarker {
        field: &'static str,
        marker: &'static str,
    },

    #[error("{field}: selector {marker} is invalid: {reason}")]
    Selector {
        field: &'static str,
        marker: &'static str,
        reason: String,
    },

    #[error("{field}: {reason}")]
    Malformed { field: &'static str, reason: String },
}
