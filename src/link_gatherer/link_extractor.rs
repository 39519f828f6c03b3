use scraper::{Html, Selector};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ParseError {
    #[error("invalid selector: {0}")]
    Selector(String),
}

/// Raw `href` values of every anchor in the document, in document order.
/// Anchors without an `href` attribute contribute nothing; empty values are
/// kept so the caller decides what to skip.
pub fn extract_hrefs(html: &str) -> Result<Vec<String>, ParseError> {
    let selector = Selector::parse("a").map_err(|err| ParseError::Selector(err.to_string()))?;
    let document = Html::parse_document(html);
    let hrefs = document
        .select(&selector)
        .filter_map(|anchor| anchor.attr("href"))
        .map(|href| href.to_string())
        .collect::<Vec<_>>();
    tracing::info!("Found {} links", hrefs.len());
    tracing::debug!("Links {:?}", hrefs);
    Ok(hrefs)
}
