use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use super::link_extractor::{extract_hrefs, ParseError};
use super::page_fetcher::{FetchError, PageFetcher};

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum GatherError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
}

pub trait LinkGatherer: Send + Sync {
    fn get_links(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Vec<String>, GatherError>> + Send;
}

/// Fetches a page and pulls the raw anchor hrefs out of it.
#[derive(Clone, Debug)]
pub struct Page<T> {
    fetcher: T,
}

impl<T: PageFetcher> Page<T> {
    pub fn new(fetcher: T) -> Self {
        Page { fetcher }
    }
}

impl<T: PageFetcher + Send + Sync> LinkGatherer for Page<T> {
    #[tracing::instrument(skip(self))]
    fn get_links(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Vec<String>, GatherError>> + Send {
        async move {
            let html = self.fetcher.fetch_page(url).await?;
            Ok(extract_hrefs(&html)?)
        }
    }
}
