use jiff::Timestamp;
use serde::Serialize;

mod context;
mod report;

use crate::classifier::classify;
use crate::link_gatherer::LinkGatherer;
use crate::request::CrawlRequest;
use context::CrawlContext;

pub use report::{CrawlReport, PageOutcome, PageVisit};

/// How internal links found along the way get scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Expansion {
    /// Level by level. Each level's frontier is a snapshot of the internal
    /// links not yet visited when the previous level finished.
    #[default]
    Frontier,
    /// After each page, walk the shared internal set as it keeps growing,
    /// including links appended by deeper pages while the walk is under way.
    Live,
}

/// Position of one page's walk over the live internal set.
struct Frame {
    depth: u32,
    cursor: usize,
}

pub struct Crawler<T: LinkGatherer> {
    pub link_getter: T,
    pub expansion: Expansion,
    pub show_progress: bool,
}

impl<T: LinkGatherer> Crawler<T> {
    #[tracing::instrument(skip(self), fields(expansion = ?self.expansion))]
    pub async fn run(&self, request: &CrawlRequest) -> CrawlReport {
        tracing::info!("Beginning crawl");
        let started_at = Timestamp::now();
        let mut context = CrawlContext::new(&request.seed_url);

        if self.show_progress {
            print!("\x1B[2J\x1B[H");
        }

        match self.expansion {
            Expansion::Frontier => self.expand_frontier(request, &mut context).await,
            Expansion::Live => self.expand_live(request, &mut context).await,
        }

        if self.show_progress {
            print!("\x1B[f\x1B[0J");
            println!("{}", context);
        }

        let elapsed_secs = Timestamp::now().duration_since(started_at).as_secs_f64();
        let (internal, external, pages) = context.into_parts();
        tracing::info!(
            "Finished crawl: {} pages, {} internal, {} external",
            pages.len(),
            internal.len(),
            external.len()
        );
        CrawlReport {
            seed_url: request.seed_url.clone(),
            max_depth: request.max_depth,
            expansion: self.expansion,
            internal,
            external,
            pages,
            started_at,
            elapsed_secs,
        }
    }

    async fn expand_frontier(&self, request: &CrawlRequest, context: &mut CrawlContext) {
        let mut frontier = vec![request.seed_url.clone()];
        let mut remaining = request.max_depth;

        while remaining > 0 && !frontier.is_empty() {
            tracing::info!("{} links in frontier at depth {}", frontier.len(), remaining);
            for url in &frontier {
                if context.is_visited(url) {
                    continue;
                }
                self.visit(url, remaining, context).await;
            }
            remaining -= 1;
            frontier = context.unvisited_internal();
        }
    }

    async fn expand_live(&self, request: &CrawlRequest, context: &mut CrawlContext) {
        if request.max_depth == 0 {
            return;
        }
        let mut frames: Vec<Frame> = vec![];
        if self.visit(&request.seed_url, request.max_depth, context).await && request.max_depth > 1
        {
            frames.push(Frame {
                depth: request.max_depth - 1,
                cursor: 0,
            });
        }

        while let Some(frame) = frames.last_mut() {
            let Some(link) = context.internal().get(frame.cursor).map(str::to_string) else {
                frames.pop();
                continue;
            };
            frame.cursor += 1;
            let depth = frame.depth;
            if context.is_visited(&link) {
                continue;
            }
            if self.visit(&link, depth, context).await && depth > 1 {
                frames.push(Frame {
                    depth: depth - 1,
                    cursor: 0,
                });
            }
        }
    }

    /// Fetches one page and files its links. Returns whether the page could
    /// be read; a failed page is logged and yields nothing.
    #[tracing::instrument(skip(self, context))]
    async fn visit(&self, url: &str, depth: u32, context: &mut CrawlContext) -> bool {
        context.mark_visited(url);
        if self.show_progress {
            print!("\x1B[f\x1B[0J");
            println!("{}", context);
        }

        let outcome = match self.link_getter.get_links(url).await {
            Ok(hrefs) => {
                for href in hrefs.iter().filter(|href| !href.is_empty()) {
                    match classify(href, url) {
                        Ok(link) => context.record_link(&link),
                        Err(err) => tracing::warn!("Skipping href: {}", err),
                    }
                }
                PageOutcome::Links(hrefs.len())
            }
            Err(err) => {
                tracing::error!("Error crawling {}: {}", url, err);
                PageOutcome::Failed(err)
            }
        };
        let succeeded = matches!(outcome, PageOutcome::Links(_));
        context.record_page(PageVisit {
            url: url.to_string(),
            depth,
            outcome,
        });
        succeeded
    }
}
