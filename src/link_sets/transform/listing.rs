use std::fmt::Write;

use crate::crawler::CrawlReport;
use crate::link_sets::LinkSet;

fn write_section(output: &mut String, title: &str, links: &LinkSet) -> std::fmt::Result {
    writeln!(output, "{} ({})", title, links.len())?;
    for url in links.iter() {
        writeln!(output, "  {}", url)?;
    }
    Ok(())
}

fn to_listing(report: &CrawlReport) -> Result<String, std::fmt::Error> {
    let mut output = String::new();
    write_section(&mut output, "Internal Links", &report.internal)?;
    write_section(&mut output, "External Links", &report.external)?;

    let failures = report.failures().collect::<Vec<_>>();
    if !failures.is_empty() {
        writeln!(output, "Failed Pages ({})", failures.len())?;
        for (url, err) in failures {
            writeln!(output, "  {} - {}", url, err)?;
        }
    }

    writeln!(
        output,
        "Total Internal Links: {}, Total External Links: {}",
        report.internal.len(),
        report.external.len()
    )?;
    Ok(output)
}

/// Plain-text listing of both link sets, any failed pages, and the totals.
pub fn render_listing(report: &CrawlReport) -> String {
    match to_listing(report) {
        Ok(listing) => listing,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::crawler::{Expansion, PageOutcome, PageVisit};
    use crate::link_gatherer::{FetchError, GatherError};

    use super::*;

    fn report(internal: &[&str], external: &[&str], pages: Vec<PageVisit>) -> CrawlReport {
        CrawlReport {
            seed_url: "https://x.com".to_string(),
            max_depth: 2,
            expansion: Expansion::Frontier,
            internal: LinkSet::from_iter(internal.iter().copied()),
            external: LinkSet::from_iter(external.iter().copied()),
            pages,
            started_at: Timestamp::UNIX_EPOCH,
            elapsed_secs: 0.0,
        }
    }

    #[test]
    fn lists_both_sets_and_totals() {
        let report = report(
            &["https://x.com/a", "https://x.com/b"],
            &["https://other.com"],
            vec![],
        );
        let expected = r#"Internal Links (2)
  https://x.com/a
  https://x.com/b
External Links (1)
  https://other.com
Total Internal Links: 2, Total External Links: 1
"#;
        assert_eq!(render_listing(&report), expected);
    }

    #[test]
    fn lists_failed_pages() {
        let report = report(
            &[],
            &[],
            vec![
                PageVisit {
                    url: "https://x.com".to_string(),
                    depth: 2,
                    outcome: PageOutcome::Links(0),
                },
                PageVisit {
                    url: "https://x.com/gone".to_string(),
                    depth: 1,
                    outcome: PageOutcome::Failed(GatherError::Fetch(FetchError::Status(404))),
                },
            ],
        );
        let expected = r#"Internal Links (0)
External Links (0)
Failed Pages (1)
  https://x.com/gone - fetch failed: non-success status 404
Total Internal Links: 0, Total External Links: 0
"#;
        assert_eq!(render_listing(&report), expected);
    }
}
