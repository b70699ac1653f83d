//! Changelog entry synthesis and the two-edit document update.
//!
//! An update is two ordered mutations: insert the synthesized entry at the
//! end of the document, then delete the line that held the trigger token.
//! There is no transaction between the two; once the insert has applied the
//! update is committed, and a failed delete leaves the entry in place.

use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::config::{Config, FormatConfig};
use crate::document::{Document, Edit};
use crate::domain::{BumpKind, ChangeCategory, SemanticVersion};
use crate::error::{ChangelogWatchError, Result};
use crate::resolver;

/// Wall-clock timestamp embedded in entry headings, fixed width
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of one changelog update. The two edits are not atomic, so each
/// partial state is reported explicitly rather than folded into a single
/// success flag.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Both edits applied
    Completed,
    /// The host rejected the insertion; nothing was mutated
    InsertRejected(ChangelogWatchError),
    /// The entry was inserted but the trigger line could not be deleted,
    /// usually because the document changed concurrently. The inserted
    /// entry is valid content and is kept.
    DeleteFailed(ChangelogWatchError),
}

impl UpdateOutcome {
    /// Whether both edits applied
    pub fn is_complete(&self) -> bool {
        matches!(self, UpdateOutcome::Completed)
    }
}

/// Applies changelog updates to a document handle
pub struct ChangelogMutator {
    format: FormatConfig,
    settle_delay: Duration,
}

impl ChangelogMutator {
    /// Create a mutator with explicit formatting and settle delay
    pub fn new(format: FormatConfig, settle_delay: Duration) -> Self {
        ChangelogMutator {
            format,
            settle_delay,
        }
    }

    /// Create a mutator from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        ChangelogMutator::new(
            config.format.clone(),
            Duration::from_millis(config.watcher.settle_delay_ms),
        )
    }

    /// Apply one changelog update.
    ///
    /// Reads the document, resolves the next version, synthesizes the entry
    /// block, appends it at the end of the document, then deletes the line
    /// at `trigger_line` by its original index. The insertion lands after
    /// all pre-existing content, so the trigger line never shifts and no
    /// index adjustment is needed between the two edits.
    ///
    /// Returns `Err` only when the document cannot be read before any edit
    /// is issued; in that case nothing was mutated. Edit failures are
    /// reported through [UpdateOutcome].
    pub fn apply_update<D: Document>(
        &self,
        doc: &mut D,
        bump: BumpKind,
        category: ChangeCategory,
        trigger_line: usize,
    ) -> Result<UpdateOutcome> {
        let text = doc.full_text()?;
        let line_count = doc.line_count()?;

        let next = resolver::resolve_next_version(&text, bump);
        let bracketed = resolver::uses_bracketed_headings(&text);
        let needs_header = !text.contains(&self.format.header);
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let block = self.synthesize_entry(next, category, &timestamp, needs_header, bracketed);

        let insert = Edit::Insert {
            line: line_count,
            column: 0,
            text: block,
        };
        if let Err(err) = doc.apply_edit(&[insert]) {
            return Ok(UpdateOutcome::InsertRejected(err));
        }

        // Give the host a moment to apply the insertion before the delete
        // is issued. Not correctness-critical.
        if !self.settle_delay.is_zero() {
            thread::sleep(self.settle_delay);
        }

        match whole_line_edit(doc, trigger_line) {
            Ok(delete) => match doc.apply_edit(&[delete]) {
                Ok(()) => Ok(UpdateOutcome::Completed),
                Err(err) => Ok(UpdateOutcome::DeleteFailed(err)),
            },
            Err(err) => Ok(UpdateOutcome::DeleteFailed(err)),
        }
    }

    /// Build the text block for one entry: optional top-level header (first
    /// use per document), version heading with timestamp, uppercased
    /// category subsection, editable placeholder, and a closing rule.
    ///
    /// The header travels inside the same end-of-document block as the
    /// entry, which is what keeps the trigger line index stable.
    pub fn synthesize_entry(
        &self,
        version: SemanticVersion,
        category: ChangeCategory,
        timestamp: &str,
        include_header: bool,
        bracketed: bool,
    ) -> String {
        let heading = if bracketed {
            format!("## [{}] - {}", version, timestamp)
        } else {
            format!("## {} - {}", version, timestamp)
        };

        let mut block = String::new();
        if include_header {
            block.push('\n');
            block.push_str(&self.format.header);
            block.push('\n');
        }
        block.push_str(&format!(
            "\n\n{}\n\n### {}: {}\n\n---\n",
            heading,
            category.heading_label(),
            self.format.placeholder
        ));
        block
    }
}

/// Edit deleting the whole line at `line`, or an error when the line no
/// longer exists.
fn whole_line_edit<D: Document>(doc: &D, line: usize) -> Result<Edit> {
    let count = doc.line_count()?;
    if line >= count {
        return Err(ChangelogWatchError::edit(format!(
            "Trigger line {} no longer exists ({} lines)",
            line, count
        )));
    }

    if line + 1 < count {
        Ok(Edit::Delete {
            start_line: line,
            start_column: 0,
            end_line: line + 1,
            end_column: 0,
        })
    } else {
        // Last line: delete its content, there is no newline to take
        let length = doc.line_text(line)?.chars().count();
        Ok(Edit::Delete {
            start_line: line,
            start_column: 0,
            end_line: line,
            end_column: length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MockDocument;

    fn mutator() -> ChangelogMutator {
        ChangelogMutator::new(FormatConfig::default(), Duration::ZERO)
    }

    #[test]
    fn test_synthesize_entry_without_header() {
        let block = mutator().synthesize_entry(
            SemanticVersion::new(1, 3, 0),
            ChangeCategory::Added,
            "2024-06-01 12:00:00",
            false,
            false,
        );
        assert_eq!(
            block,
            "\n\n## 1.3.0 - 2024-06-01 12:00:00\n\n### ADDED: [Note user can add]\n\n---\n"
        );
    }

    #[test]
    fn test_synthesize_entry_with_header() {
        let block = mutator().synthesize_entry(
            SemanticVersion::new(0, 0, 1),
            ChangeCategory::Fixed,
            "2024-06-01 12:00:00",
            true,
            false,
        );
        assert!(block.starts_with("\n# Changelog\n"));
        assert!(block.contains("## 0.0.1"));
    }

    #[test]
    fn test_synthesize_entry_bracketed() {
        let block = mutator().synthesize_entry(
            SemanticVersion::new(2, 0, 0),
            ChangeCategory::Changed,
            "2024-06-01 12:00:00",
            false,
            true,
        );
        assert!(block.contains("## [2.0.0] - 2024-06-01 12:00:00"));
    }

    #[test]
    fn test_apply_update_two_ordered_batches() {
        let mut doc = MockDocument::new("# Changelog\n\n## 0.1.0\n\nchangelog-patch-fixed\n");
        let outcome = mutator()
            .apply_update(&mut doc, BumpKind::Patch, ChangeCategory::Fixed, 4)
            .unwrap();

        assert!(outcome.is_complete());
        assert_eq!(doc.batches().len(), 2);
        assert!(matches!(doc.batches()[0][0], Edit::Insert { .. }));
        assert!(matches!(
            doc.batches()[1][0],
            Edit::Delete { start_line: 4, .. }
        ));

        let text = doc.text();
        assert!(text.contains("## 0.1.1"));
        assert!(!text.contains("changelog-patch-fixed"));
    }

    #[test]
    fn test_apply_update_unreadable_document_no_mutation() {
        let mut doc = MockDocument::new("changelog-minor-added\n");
        doc.make_unreadable();
        let result = mutator().apply_update(&mut doc, BumpKind::Minor, ChangeCategory::Added, 0);
        assert!(result.is_err());
        assert!(doc.batches().is_empty());
    }

    #[test]
    fn test_apply_update_stale_trigger_line() {
        let mut doc = MockDocument::new("changelog-minor-added");
        let outcome = mutator()
            // Line 40 never existed
            .apply_update(&mut doc, BumpKind::Minor, ChangeCategory::Added, 40)
            .unwrap();

        assert!(matches!(outcome, UpdateOutcome::DeleteFailed(_)));
        // Only the insert batch reached the document, and its entry is kept
        assert_eq!(doc.batches().len(), 1);
        assert!(doc.text().contains("## 0.1.0"));
    }
}
