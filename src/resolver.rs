//! Version resolution over raw document text.
//!
//! Scans the whole document for recorded version numbers and computes the
//! next version for a requested bump kind. Two grammars are recognized:
//!
//! - heading form: `## 1.2.3` or `## [1.2.3]` (any heading depth from `##`)
//! - table-row form: `| 1.2.3 | ... |`
//!
//! The "latest" version is the last match in document order, not the
//! numerically greatest one: changelogs here are append-only, so newer
//! entries always sit after older ones.

use crate::domain::{BumpKind, SemanticVersion};

/// Heading-style version match, e.g. `## 1.2.3` / `### [2.0.0]`
const HEADING_PATTERN: &str = r"##+\s*(\[)?(\d+)\.(\d+)\.(\d+)\]?";

/// Table-row version match, e.g. `| 1.2.3 | 21-01-01 | ... |`
const TABLE_PATTERN: &str = r"\|\s*(\d+)\.(\d+)\.(\d+)\s*\|";

#[derive(Debug, Clone, Copy)]
struct VersionMatch {
    offset: usize,
    version: SemanticVersion,
    bracketed: bool,
}

/// Find the last recorded version in document order, or `None` if the text
/// contains no recognizable version.
pub fn latest_version(text: &str) -> Option<SemanticVersion> {
    last_match(text).map(|m| m.version)
}

/// Compute the next version for a bump kind. A document without any recorded
/// version starts from 0.0.0.
///
/// Pure and deterministic: no side effects, same output for same input.
pub fn resolve_next_version(text: &str, bump: BumpKind) -> SemanticVersion {
    latest_version(text)
        .unwrap_or_else(SemanticVersion::zero)
        .bump(bump)
}

/// Whether the document's latest version heading uses the bracketed
/// convention (`## [1.2.3]`). Synthesis reuses whichever style the document
/// already has; table rows count as unbracketed.
pub fn uses_bracketed_headings(text: &str) -> bool {
    last_match(text).map(|m| m.bracketed).unwrap_or(false)
}

fn last_match(text: &str) -> Option<VersionMatch> {
    let mut latest: Option<VersionMatch> = None;

    if let Ok(re) = regex::Regex::new(HEADING_PATTERN) {
        for captures in re.captures_iter(text) {
            if let Some(found) = capture_version(&captures, 2, captures.get(1).is_some()) {
                latest = later_of(latest, found);
            }
        }
    }

    if let Ok(re) = regex::Regex::new(TABLE_PATTERN) {
        for captures in re.captures_iter(text) {
            if let Some(found) = capture_version(&captures, 1, false) {
                latest = later_of(latest, found);
            }
        }
    }

    latest
}

fn capture_version(
    captures: &regex::Captures<'_>,
    first_group: usize,
    bracketed: bool,
) -> Option<VersionMatch> {
    let offset = captures.get(0)?.start();
    let major = captures.get(first_group)?.as_str().parse::<u32>().ok()?;
    let minor = captures.get(first_group + 1)?.as_str().parse::<u32>().ok()?;
    let patch = captures.get(first_group + 2)?.as_str().parse::<u32>().ok()?;

    Some(VersionMatch {
        offset,
        version: SemanticVersion::new(major, minor, patch),
        bracketed,
    })
}

fn later_of(current: Option<VersionMatch>, candidate: VersionMatch) -> Option<VersionMatch> {
    match current {
        Some(existing) if existing.offset >= candidate.offset => Some(existing),
        _ => Some(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_version_heading() {
        let text = "# Changelog\n\n## 1.2.3 - 2024-01-01\n\nnotes\n";
        assert_eq!(latest_version(text), Some(SemanticVersion::new(1, 2, 3)));
    }

    #[test]
    fn test_latest_version_bracketed_heading() {
        let text = "## [0.4.1] - 2024-03-10\n";
        assert_eq!(latest_version(text), Some(SemanticVersion::new(0, 4, 1)));
        assert!(uses_bracketed_headings(text));
    }

    #[test]
    fn test_latest_version_table_row() {
        let text = "| 1.2.3 | 21-01-01 | DUMMY | entry |\n";
        assert_eq!(latest_version(text), Some(SemanticVersion::new(1, 2, 3)));
        assert!(!uses_bracketed_headings(text));
    }

    #[test]
    fn test_latest_is_last_not_greatest() {
        let text = "## 2.0.0\n\nold rewrite\n\n## 1.0.0\n\nbackport entry\n";
        assert_eq!(latest_version(text), Some(SemanticVersion::new(1, 0, 0)));
    }

    #[test]
    fn test_latest_across_mixed_grammars() {
        let text = "## 1.0.0\n\n| 1.1.0 | 21-05-01 | ADDED | later entry |\n";
        assert_eq!(latest_version(text), Some(SemanticVersion::new(1, 1, 0)));
    }

    #[test]
    fn test_no_version_found() {
        assert_eq!(latest_version("nothing to see here"), None);
        assert_eq!(latest_version(""), None);
    }

    #[test]
    fn test_resolve_next_version_defaults_to_zero() {
        let text = "a document with no changelog";
        assert_eq!(
            resolve_next_version(text, BumpKind::Major),
            SemanticVersion::new(1, 0, 0)
        );
        assert_eq!(
            resolve_next_version(text, BumpKind::Minor),
            SemanticVersion::new(0, 1, 0)
        );
        assert_eq!(
            resolve_next_version(text, BumpKind::Patch),
            SemanticVersion::new(0, 0, 1)
        );
    }

    #[test]
    fn test_resolve_next_version_patch_carry() {
        let text = "| 2.5.9 | 21-01-01 | DUMMY | entry |";
        assert_eq!(
            resolve_next_version(text, BumpKind::Patch),
            SemanticVersion::new(2, 5, 10)
        );
    }

    #[test]
    fn test_resolve_next_version_resets_lower_components() {
        let text = "## 1.2.3\n";
        assert_eq!(
            resolve_next_version(text, BumpKind::Major),
            SemanticVersion::new(2, 0, 0)
        );
        assert_eq!(
            resolve_next_version(text, BumpKind::Minor),
            SemanticVersion::new(1, 3, 0)
        );
    }

    #[test]
    fn test_ignores_non_triple_numbers() {
        let text = "## 1.2\n\nversion 3 came later\n";
        assert_eq!(latest_version(text), None);
    }

    #[test]
    fn test_bracket_style_follows_last_heading() {
        let text = "## [1.0.0]\n\n## 1.1.0\n";
        assert!(!uses_bracketed_headings(text));
    }
}
