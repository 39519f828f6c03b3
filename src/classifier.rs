use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkKind {
    Internal,
    External,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Internal => "Internal",
            LinkKind::External => "External",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLink {
    pub kind: LinkKind,
    pub resolved_url: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("cannot resolve {href} against {page_url}: {reason}")]
    Resolve {
        href: String,
        page_url: String,
        reason: String,
    },
}

/// Decides whether `href`, found on `page_url`, points inside the site.
///
/// A link is internal when it literally starts with the page URL or is
/// root-relative. Root-relative links are resolved against the page URL;
/// everything else is kept exactly as written, so `two` or `#top` end up
/// external.
pub fn classify(href: &str, page_url: &str) -> Result<ClassifiedLink, ClassifyError> {
    if href.starts_with('/') {
        return Ok(ClassifiedLink {
            kind: LinkKind::Internal,
            resolved_url: resolve(href, page_url)?,
        });
    }
    let kind = if href.starts_with(page_url) {
        LinkKind::Internal
    } else {
        LinkKind::External
    };
    Ok(ClassifiedLink {
        kind,
        resolved_url: href.to_string(),
    })
}

fn resolve(href: &str, page_url: &str) -> Result<String, ClassifyError> {
    Url::parse(page_url)
        .and_then(|base| base.join(href))
        .map(|url| url.to_string())
        .map_err(|err| ClassifyError::Resolve {
            href: href.to_string(),
            page_url: page_url.to_string(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal(url: &str) -> Result<ClassifiedLink, ClassifyError> {
        Ok(ClassifiedLink {
            kind: LinkKind::Internal,
            resolved_url: url.to_string(),
        })
    }

    fn external(url: &str) -> Result<ClassifiedLink, ClassifyError> {
        Ok(ClassifiedLink {
            kind: LinkKind::External,
            resolved_url: url.to_string(),
        })
    }

    #[test]
    fn root_relative_resolves_against_page() {
        assert_eq!(
            classify("/about", "https://x.com/a"),
            internal("https://x.com/about")
        );
        assert_eq!(
            classify("/three/four?hello=there", "https://x.com/a/b"),
            internal("https://x.com/three/four?hello=there")
        );
    }

    #[test]
    fn other_host_is_external() {
        assert_eq!(
            classify("https://other.com/x", "https://x.com/a"),
            external("https://other.com/x")
        );
    }

    #[test]
    fn page_prefix_is_internal_and_unmodified() {
        assert_eq!(
            classify("https://x.com/a/child", "https://x.com/a"),
            internal("https://x.com/a/child")
        );
        assert_eq!(
            classify("https://x.com/a", "https://x.com/a"),
            internal("https://x.com/a")
        );
    }

    #[test]
    fn same_host_outside_page_prefix_is_external() {
        assert_eq!(
            classify("https://x.com/b", "https://x.com/a"),
            external("https://x.com/b")
        );
    }

    #[test]
    fn document_relative_and_fragments_stay_external_verbatim() {
        assert_eq!(classify("two", "https://x.com/a"), external("two"));
        assert_eq!(classify("#top", "https://x.com/a"), external("#top"));
        assert_eq!(
            classify("mailto:me@x.com", "https://x.com/a"),
            external("mailto:me@x.com")
        );
    }

    #[test]
    fn protocol_relative_counts_as_internal() {
        assert_eq!(
            classify("//cdn.x.com/lib.js", "https://x.com/a"),
            internal("https://cdn.x.com/lib.js")
        );
    }

    #[test]
    fn unparsable_page_url_fails_resolution() {
        match classify("/about", "not a url") {
            Err(ClassifyError::Resolve { href, .. }) => assert_eq!(href, "/about"),
            other => panic!("expected resolve error, got {:?}", other),
        }
        assert_eq!(
            classify("https://other.com", "not a url"),
            external("https://other.com")
        );
    }
}
