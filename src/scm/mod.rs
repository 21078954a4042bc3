//! SCM section extraction from POM descriptors.
//!
//! A POM's `<scm>` section carries the source-control location in one or
//! more child elements, in whichever of several historical shapes the
//! publisher chose:
//!
//! ```xml
//! <scm>
//!   <connection>scm:git:git@github.com:OWNER/REPO.git</connection>
//!   <url>https://github.com/OWNER/REPO</url>
//! </scm>
//! ```
//!
//! The extractor streams the document, takes the first text node inside the
//! first `<scm>` element that mentions `github.com`, and normalizes whatever
//! follows the marker into an `owner/repo` reference: a leading `/` (URL
//! form) or `:` (SCP form) is stripped, as are a trailing `.git` and a
//! trailing `/issues` (issue-tracker URLs mistakenly used as the SCM URL).
//!
//! Documents without an `<scm>` section, or without a matching child, yield
//! nothing and the dependency is skipped. Malformed XML is fatal: a corrupt
//! descriptor in the local repository aborts the run.

use anyhow::Result;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::core::{RepoRef, ThanksError};

/// Marker identifying the hosting domain inside SCM text.
const GITHUB_MARKER: &str = "github.com";

/// Extract the GitHub repository reference from a POM document.
///
/// Returns `Ok(None)` when the document has no `<scm>` section or no child
/// text mentioning `github.com`. Parse failures propagate as
/// [`ThanksError::DescriptorParseError`].
pub fn extract_repo(xml: &str) -> Result<Option<RepoRef>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // Depth within the first <scm> element; 0 means outside it
    let mut scm_depth: usize = 0;

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(e) => {
                if scm_depth > 0 {
                    scm_depth += 1;
                } else if e.local_name().as_ref() == b"scm" {
                    scm_depth = 1;
                }
            }
            Event::End(_) => {
                if scm_depth > 0 {
                    scm_depth -= 1;
                    if scm_depth == 0 {
                        // The first <scm> section ended without a match;
                        // later sections are not considered.
                        return Ok(None);
                    }
                }
            }
            Event::Text(t) if scm_depth > 0 => {
                let text = t.unescape().map_err(parse_error)?;
                if let Some(fragment) = fragment_after_marker(&text) {
                    return Ok(normalize_fragment(fragment));
                }
            }
            Event::CData(c) if scm_depth > 0 => {
                let raw = c.into_inner();
                let text = String::from_utf8_lossy(&raw);
                if let Some(fragment) = fragment_after_marker(&text) {
                    return Ok(normalize_fragment(fragment));
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn parse_error(error: impl std::fmt::Display) -> ThanksError {
    ThanksError::DescriptorParseError {
        reason: error.to_string(),
    }
}

/// The substring following the first `github.com` occurrence, if any.
fn fragment_after_marker(text: &str) -> Option<&str> {
    text.find(GITHUB_MARKER).map(|idx| &text[idx + GITHUB_MARKER.len()..])
}

/// Normalize a raw URL fragment into `owner/repo`.
fn normalize_fragment(fragment: &str) -> Option<RepoRef> {
    let repo = fragment.trim();
    // URL form starts with '/', SCP form with ':'
    let repo = repo
        .strip_prefix('/')
        .or_else(|| repo.strip_prefix(':'))
        .unwrap_or(repo);
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    let repo = repo.strip_suffix("/issues").unwrap_or(repo);
    if repo.is_empty() {
        return None;
    }
    Some(RepoRef::new(repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pom(scm_children: &str) -> String {
        format!(
            "<project><modelVersion>4.0.0</modelVersion><scm>{scm_children}</scm></project>"
        )
    }

    #[test]
    fn no_scm_section_yields_nothing() {
        let xml = "<project><modelVersion>4.0.0</modelVersion></project>";
        assert_eq!(extract_repo(xml).unwrap(), None);
    }

    #[test]
    fn https_url_with_git_suffix() {
        let xml = pom("<url>https://github.com/OWNER/REPO.git</url>");
        assert_eq!(extract_repo(&xml).unwrap(), Some(RepoRef::new("OWNER/REPO")));
    }

    #[test]
    fn scp_style_connection() {
        let xml = pom("<connection>scm:git:git@github.com:OWNER/REPO.git</connection>");
        assert_eq!(extract_repo(&xml).unwrap(), Some(RepoRef::new("OWNER/REPO")));
    }

    #[test]
    fn issues_suffix_is_stripped() {
        let xml = pom("<url>https://github.com/OWNER/REPO/issues</url>");
        assert_eq!(extract_repo(&xml).unwrap(), Some(RepoRef::new("OWNER/REPO")));
    }

    #[test]
    fn first_matching_child_wins() {
        let xml = pom(
            "<connection>scm:svn:https://svn.example.org/repo</connection>\
             <url>https://github.com/first/match</url>\
             <developerConnection>scm:git:git@github.com:second/match.git</developerConnection>",
        );
        assert_eq!(extract_repo(&xml).unwrap(), Some(RepoRef::new("first/match")));
    }

    #[test]
    fn scm_without_github_yields_nothing() {
        let xml = pom("<url>https://gitlab.com/OWNER/REPO</url>");
        assert_eq!(extract_repo(&xml).unwrap(), None);
    }

    #[test]
    fn bare_domain_yields_nothing() {
        let xml = pom("<url>https://github.com</url>");
        assert_eq!(extract_repo(&xml).unwrap(), None);
    }

    #[test]
    fn plain_url_without_suffixes() {
        let xml = pom("<url>https://github.com/OWNER/REPO</url>");
        assert_eq!(extract_repo(&xml).unwrap(), Some(RepoRef::new("OWNER/REPO")));
    }

    #[test]
    fn malformed_document_is_fatal() {
        let xml = "<project><scm></url></project>";
        assert!(extract_repo(xml).is_err());
    }
}
