mod link_extractor;
mod page;
mod page_fetcher;

pub use link_extractor::ParseError;
pub use page::{GatherError, LinkGatherer, Page};
pub use page_fetcher::{AllOrigins, FetchError, Fetcher, PageFetcher, DEFAULT_PROXY_ENDPOINT};
