use jiff::Timestamp;
use serde::Serialize;

use crate::link_gatherer::GatherError;
use crate::link_sets::LinkSet;

use super::Expansion;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PageOutcome {
    /// Number of hrefs the page yielded, before classification.
    Links(usize),
    Failed(GatherError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageVisit {
    pub url: String,
    /// Remaining depth budget when the page was fetched.
    pub depth: u32,
    pub outcome: PageOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub seed_url: String,
    pub max_depth: u32,
    pub expansion: Expansion,
    pub internal: LinkSet,
    pub external: LinkSet,
    pub pages: Vec<PageVisit>,
    pub started_at: Timestamp,
    pub elapsed_secs: f64,
}

impl CrawlReport {
    pub fn failures(&self) -> impl Iterator<Item = (&str, &GatherError)> {
        self.pages.iter().filter_map(|visit| match &visit.outcome {
            PageOutcome::Failed(err) => Some((visit.url.as_str(), err)),
            PageOutcome::Links(_) => None,
        })
    }

    pub fn fetch_count(&self) -> usize {
        self.pages.len()
    }
}
