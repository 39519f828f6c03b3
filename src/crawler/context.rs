use std::{
    collections::HashSet,
    fmt::{Display, Formatter, Result},
};

use crate::classifier::{ClassifiedLink, LinkKind};
use crate::link_sets::LinkSet;

use super::report::PageVisit;

const BAR_WIDTH: usize = 50;

/// Everything a single crawl accumulates. Created when a crawl starts and
/// consumed into the report when it ends, so two crawls never share state.
pub struct CrawlContext {
    root: String,
    visited: HashSet<String>,
    internal: LinkSet,
    external: LinkSet,
    pages: Vec<PageVisit>,
}

impl CrawlContext {
    pub fn new(root: &str) -> Self {
        CrawlContext {
            root: root.to_string(),
            visited: HashSet::new(),
            internal: LinkSet::new(),
            external: LinkSet::new(),
            pages: vec![],
        }
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Returns `false` if the URL had already been visited.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Internal wins: a URL seen as internal anywhere never stays external.
    pub fn record_link(&mut self, link: &ClassifiedLink) {
        match link.kind {
            LinkKind::Internal => {
                self.external.remove(&link.resolved_url);
                self.internal.insert(&link.resolved_url);
            }
            LinkKind::External => {
                if !self.internal.contains(&link.resolved_url) {
                    self.external.insert(&link.resolved_url);
                }
            }
        }
    }

    pub fn record_page(&mut self, visit: PageVisit) {
        self.pages.push(visit);
    }

    pub fn internal(&self) -> &LinkSet {
        &self.internal
    }

    /// Snapshot of the internal links that have not been fetched yet.
    pub fn unvisited_internal(&self) -> Vec<String> {
        self.internal
            .iter()
            .filter(|url| !self.visited.contains(*url))
            .map(|url| url.to_string())
            .collect()
    }

    pub fn into_parts(self) -> (LinkSet, LinkSet, Vec<PageVisit>) {
        (self.internal, self.external, self.pages)
    }

    fn progress_bar(&self) -> String {
        let completed = self.visited.len();
        let total = completed + self.unvisited_internal().len();
        let filled = if total == 0 {
            0
        } else {
            completed * BAR_WIDTH / total
        };
        let mut bar = String::new();
        for i in 0..BAR_WIDTH {
            bar += if i < filled { "█" } else { " " }
        }
        bar += &format!(
            " | {}/{} pages ... {} internal, {} external",
            completed,
            total,
            self.internal.len(),
            self.external.len()
        );
        bar
    }

    pub fn get_status(&self) -> String {
        format!("\nCrawling - {}\n{}", self.root, self.progress_bar())
    }
}

impl Display for CrawlContext {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", &self.get_status())
    }
}
