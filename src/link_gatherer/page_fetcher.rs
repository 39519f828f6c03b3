use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PROXY_ENDPOINT: &str = "https://api.allorigins.win/get";

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum FetchError {
    #[error("non-success status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable content: {0}")]
    Content(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None if err.is_decode() || err.is_body() => FetchError::Content(err.to_string()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

pub trait PageFetcher {
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

impl PageFetcher for reqwest::Client {
    #[tracing::instrument(skip(self))]
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        async move {
            let resp = self.get(url).send().await.map_err(|err| {
                tracing::error!("{}", err);
                FetchError::from(err)
            })?;
            if !resp.status().is_success() {
                tracing::error!("status {}", resp.status());
                return Err(FetchError::Status(resp.status().as_u16()));
            }
            resp.text().await.map_err(|err| {
                tracing::error!("{}", err);
                FetchError::Content(err.to_string())
            })
        }
    }
}

/// Envelope returned by an allorigins-style `/get` endpoint.
#[derive(Deserialize, Debug)]
struct ProxyEnvelope {
    contents: Option<String>,
}

/// Fetches pages through a CORS indirection service instead of hitting the
/// origin directly. The target URL travels percent-encoded in the `url`
/// query parameter and the page body comes back inside a JSON envelope.
#[derive(Clone, Debug)]
pub struct AllOrigins {
    client: reqwest::Client,
    endpoint: String,
}

impl AllOrigins {
    pub fn new(client: reqwest::Client, endpoint: &str) -> Self {
        AllOrigins {
            client,
            endpoint: endpoint.to_string(),
        }
    }
}

impl PageFetcher for AllOrigins {
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        async move {
            let resp = self
                .client
                .get(&self.endpoint)
                .query(&[("url", url)])
                .send()
                .await
                .map_err(|err| {
                    tracing::error!("{}", err);
                    FetchError::from(err)
                })?;
            if !resp.status().is_success() {
                tracing::error!("proxy status {}", resp.status());
                return Err(FetchError::Status(resp.status().as_u16()));
            }
            let envelope: ProxyEnvelope = resp.json().await.map_err(|err| {
                tracing::error!("{}", err);
                FetchError::Content(err.to_string())
            })?;
            envelope
                .contents
                .ok_or_else(|| FetchError::Content("proxy returned no contents".to_string()))
        }
    }
}

/// Runtime choice between fetching the origin directly or through a proxy.
#[derive(Clone, Debug)]
pub enum Fetcher {
    Direct(reqwest::Client),
    Proxy(AllOrigins),
}

impl PageFetcher for Fetcher {
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        async move {
            match self {
                Fetcher::Direct(client) => client.fetch_page(url).await,
                Fetcher::Proxy(proxy) => proxy.fetch_page(url).await,
            }
        }
    }
}
