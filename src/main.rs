mod classifier;
mod crawler;
mod link_gatherer;
mod link_sets;
mod request;

use std::{path::PathBuf, process, time::Duration};

use clap::Parser;
use crawler::{Crawler, Expansion};
use link_gatherer::{AllOrigins, Fetcher, Page, DEFAULT_PROXY_ENDPOINT};
use link_sets::{export_csv, render_chart, render_listing};
use request::CrawlRequest;

const DEFAULT_CSV_PATH: &str = "weblink_analysis.csv";
const DEFAULT_USER_AGENT: &str = "weblink_analyzer/0.1";
const CHART_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum FetchMode {
    /// Through a CORS proxy that wraps the page in JSON
    Proxy,
    /// Straight from the origin
    Direct,
}

#[derive(Parser, Debug)]
#[command(version, about = "Crawl a site and sort its links into internal and external")]
pub struct Cli {
    /// The seed URL to begin from
    #[arg(short, long)]
    url: Option<String>,
    /// Levels of pages to fetch; 0 fetches nothing, 1 only the seed
    #[arg(short, long, allow_hyphen_values = true)]
    depth: Option<String>,
    #[arg(long, value_enum, default_value_t = FetchMode::Proxy)]
    fetch: FetchMode,
    #[arg(long, default_value = DEFAULT_PROXY_ENDPOINT)]
    proxy_endpoint: String,
    #[arg(long, value_enum, default_value_t = Expansion::Frontier)]
    expansion: Expansion,
    /// Also write the links as CSV
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CSV_PATH)]
    csv: Option<PathBuf>,
    /// Print the full report as JSON instead of the listing
    #[arg(long)]
    json: bool,
    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Redraw a status bar before every fetch
    #[arg(long)]
    progress: bool,
    #[arg(short, long)]
    log_level: Option<String>,
}

fn build_client(args: &Cli) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(args.user_agent.as_str());
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

async fn run(args: Cli) -> i32 {
    let request = match CrawlRequest::parse(
        args.url.as_deref().unwrap_or_default(),
        args.depth.as_deref().unwrap_or_default(),
    ) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{}", err);
            return 2;
        }
    };

    let client = match build_client(&args) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Could not build HTTP client: {}", err);
            return 2;
        }
    };
    let fetcher = match args.fetch {
        FetchMode::Proxy => Fetcher::Proxy(AllOrigins::new(client, &args.proxy_endpoint)),
        FetchMode::Direct => Fetcher::Direct(client),
    };

    let crawler = Crawler {
        link_getter: Page::new(fetcher),
        expansion: args.expansion,
        show_progress: args.progress,
    };
    let report = crawler.run(&request).await;

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Could not serialize report: {}", err);
                return 1;
            }
        }
    } else {
        println!("\n{}", render_listing(&report));
        println!(
            "{}",
            render_chart(report.internal.len(), report.external.len(), CHART_WIDTH)
        );
        println!(
            "Fetched {} pages in {:.2}s",
            report.fetch_count(),
            report.elapsed_secs
        );
    }

    if let Some(path) = &args.csv {
        if let Err(err) = export_csv(&report.internal, &report.external, path) {
            eprintln!("Could not export {}: {}", path.display(), err);
            return 1;
        }
        eprintln!("Links written to {}", path.display());
    }
    0
}

#[tokio::main]
async fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    if let Some(log_level) = &args.log_level {
        tracing_subscriber::fmt()
            .with_env_filter(format!("weblink_analyzer={}", log_level))
            .compact()
            .init();
    }
    process::exit(run(args).await);
}
