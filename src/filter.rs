use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use regex::Regex;
use url::Url;

/// Patent identifiers such as `US1234567B2` or `WO2025235535A2/en`
const IDENTIFIER_PATTERN: &str = r"^[A-Za-z0-9]+(?:/[A-Za-z]{2}(?:-[A-Za-z]+)?)?$";

/// Decides which URLs may be fetched and builds canonical patent URLs
#[derive(Debug)]
pub struct UrlFilter {
    base_url: String,
    host: String,
    patent_path: String,
    identifier: Regex,
}

impl UrlFilter {
    /// Create a new URL filter from configuration
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let identifier =
            Regex::new(IDENTIFIER_PATTERN).map_err(|e| ScrapeError::Config(e.to_string()))?;

        Ok(Self {
            base_url: config.origin().to_string(),
            host: config.expected_host()?,
            patent_path: config.patent_path.trim_matches('/').to_string(),
            identifier,
        })
    }

    /// Checks that `url` is an absolute http(s) URL on the expected host
    pub fn validate(&self, url: &str) -> Result<Url, ScrapeError> {
        let parsed = Url::parse(url.trim())
            .map_err(|e| ScrapeError::InvalidInput(format!("{}: {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ScrapeError::InvalidInput(format!(
                "{}: unsupported scheme {}",
                url,
                parsed.scheme()
            )));
        }

        match parsed.host_str() {
            Some(host) if host.eq_ignore_ascii_case(&self.host) => Ok(parsed),
            _ => Err(ScrapeError::InvalidInput(format!(
                "{}: expected a URL on {}",
                url, self.host
            ))),
        }
    }

    /// Turns a URL or a bare patent identifier into a validated page URL.
    ///
    /// Identifiers keep their case and are expanded to
    /// `<base_url>/<patent_path>/<identifier>`.
    pub fn canonicalize(&self, input: &str) -> Result<Url, ScrapeError> {
        let input = input.trim();
        if input.contains("://") {
            return self.validate(input);
        }

        if !self.identifier.is_match(input) {
            return Err(ScrapeError::InvalidInput(format!(
                "{:?} is neither a URL nor a patent identifier",
                input
            )));
        }

        let url = format!("{}/{}/{}", self.base_url, self.patent_path, input);
        ::log::debug!("Expanded identifier {} to {}", input, url);
        self.validate(&url)
    }

    pub fn absolutize(&self, href: &str) -> String {
        absolutize(&self.base_url, href)
    }
}

/// Prefixes `origin` onto root-relative links; other links pass through unchanged
pub fn absolutize(origin: &str, href: &str) -> String {
    if href.starts_with('/') && !href.starts_with("//") {
        format!("{}{}", origin.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> UrlFilter {
        UrlFilter::new(&ScraperConfig::default()).unwrap()
    }

    #[test]
    fn test_validate_accepts_patent_host() {
        let url = filter()
            .validate("https://patents.google.com/patent/US1234567B2/en")
            .unwrap();
        assert_eq!(url.path(), "/patent/US1234567B2/en");
    }

    #[test]
    fn test_validate_rejects_other_hosts() {
        let filter = filter();
        for url in [
            "https://example.com/patent/US1234567B2",
            "https://patents.google.com.evil.test/patent/US1",
            "ftp://patents.google.com/patent/US1",
            "patents.google.com/patent/US1",
            "",
        ] {
            let result = filter.validate(url);
            assert!(
                matches!(result, Err(ScrapeError::InvalidInput(_))),
                "URL '{}' should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_canonicalize_identifier() {
        let filter = filter();
        assert_eq!(
            filter.canonicalize(" WO2025235535A2 ").unwrap().as_str(),
            "https://patents.google.com/patent/WO2025235535A2"
        );
        assert_eq!(
            filter.canonicalize("US1234567B2/en").unwrap().as_str(),
            "https://patents.google.com/patent/US1234567B2/en"
        );
        // Case is preserved
        assert_eq!(
            filter.canonicalize("us1234567b2").unwrap().path(),
            "/patent/us1234567b2"
        );
    }

    #[test]
    fn test_canonicalize_passes_urls_through_validation() {
        let filter = filter();
        assert!(
            filter
                .canonicalize("https://patents.google.com/patent/EP1000000A1")
                .is_ok()
        );
        assert!(filter.canonicalize("https://example.com/patent/EP1").is_err());
        assert!(filter.canonicalize("US 123").is_err());
        assert!(filter.canonicalize("../etc/passwd").is_err());
    }

    #[test]
    fn test_absolutize() {
        let filter = filter();
        assert_eq!(
            filter.absolutize("/patent/US123"),
            "https://patents.google.com/patent/US123"
        );
        assert_eq!(
            filter.absolutize("https://scholar.google.com/scholar?q=x"),
            "https://scholar.google.com/scholar?q=x"
        );
        assert_eq!(absolutize("http://127.0.0.1:9000/", "/a"), "http://127.0.0.1:9000/a");
    }
}
