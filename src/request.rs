use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter a URL to crawl.")]
    EmptyUrl,
    #[error("'{0}' is not a valid URL: {1}")]
    InvalidUrl(String, String),
    #[error("Depth must be a non-negative whole number, got '{0}'.")]
    InvalidDepth(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrawlRequest {
    pub seed_url: String,
    pub max_depth: u32,
}

impl CrawlRequest {
    /// Checks raw user input before anything touches the network. The seed is
    /// kept exactly as typed since link classification compares against it
    /// literally.
    pub fn parse(url: &str, depth: &str) -> Result<Self, ValidationError> {
        let seed_url = url.trim();
        if seed_url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        if let Err(err) = Url::parse(seed_url) {
            return Err(ValidationError::InvalidUrl(
                seed_url.to_string(),
                err.to_string(),
            ));
        }
        let max_depth = depth
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidDepth(depth.to_string()))?;
        Ok(CrawlRequest {
            seed_url: seed_url.to_string(),
            max_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_url_and_depth() {
        assert_eq!(
            CrawlRequest::parse("https://x.com/a", "2"),
            Ok(CrawlRequest {
                seed_url: "https://x.com/a".to_string(),
                max_depth: 2,
            })
        );
        assert_eq!(
            CrawlRequest::parse("  https://x.com ", " 0 ").map(|r| (r.seed_url, r.max_depth)),
            Ok(("https://x.com".to_string(), 0))
        );
    }

    #[test]
    fn rejects_empty_url() {
        assert_eq!(
            CrawlRequest::parse("   ", "2"),
            Err(ValidationError::EmptyUrl)
        );
    }

    #[test]
    fn rejects_unparsable_url() {
        match CrawlRequest::parse("x.com/no-scheme", "2") {
            Err(ValidationError::InvalidUrl(url, _)) => assert_eq!(url, "x.com/no-scheme"),
            other => panic!("expected invalid url, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_or_negative_depth() {
        for depth in ["", "two", "-1", "1.5"] {
            assert_eq!(
                CrawlRequest::parse("https://x.com", depth),
                Err(ValidationError::InvalidDepth(depth.to_string()))
            );
        }
    }
}
