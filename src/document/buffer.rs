use std::fs;
use std::path::Path;

use crate::document::{Document, Edit};
use crate::error::{ChangelogWatchError, Result};

/// In-memory line buffer implementing [Document].
///
/// This is the document handle the CLI host works with: the file is loaded
/// into the buffer, edits are applied in memory, and the result is written
/// back in one step. An empty document still has one (empty) line, matching
/// editor line-count semantics.
#[derive(Debug, Clone)]
pub struct BufferDocument {
    lines: Vec<String>,
}

impl BufferDocument {
    /// Create a buffer from raw text
    pub fn new(text: &str) -> Self {
        BufferDocument {
            lines: text.split('\n').map(String::from).collect(),
        }
    }

    /// Load a buffer from a file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(BufferDocument::new(&text))
    }

    /// Write the buffer back to a file on disk
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.text())?;
        Ok(())
    }

    /// Current text of the buffer
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn apply_one(lines: &mut Vec<String>, edit: &Edit) -> Result<()> {
        match edit {
            Edit::Insert { line, column, text } => {
                // A position at or past the end of the document appends at
                // the very end.
                let (line, column) = if *line >= lines.len() {
                    let last = lines.len() - 1;
                    (last, lines[last].chars().count())
                } else {
                    (*line, *column)
                };

                let target = &lines[line];
                let at = byte_index(target, column);
                let combined = format!("{}{}{}", &target[..at], text, &target[at..]);
                let replacement: Vec<String> = combined.split('\n').map(String::from).collect();
                lines.splice(line..=line, replacement);
                Ok(())
            }
            Edit::Delete {
                start_line,
                start_column,
                end_line,
                end_column,
            } => {
                if *start_line >= lines.len() || *end_line >= lines.len() {
                    return Err(ChangelogWatchError::edit(format!(
                        "Delete range {}..{} is outside the document ({} lines)",
                        start_line,
                        end_line,
                        lines.len()
                    )));
                }
                if start_line > end_line {
                    return Err(ChangelogWatchError::edit(format!(
                        "Delete range starts at line {} after its end line {}",
                        start_line, end_line
                    )));
                }

                let prefix_end = byte_index(&lines[*start_line], *start_column);
                let suffix_start = byte_index(&lines[*end_line], *end_column);
                let merged = format!(
                    "{}{}",
                    &lines[*start_line][..prefix_end],
                    &lines[*end_line][suffix_start..]
                );
                lines.splice(*start_line..=*end_line, [merged]);
                Ok(())
            }
        }
    }
}

/// Byte offset of a character column, clamped to the end of the line
fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(index, _)| index)
        .unwrap_or(line.len())
}

impl Document for BufferDocument {
    fn full_text(&self) -> Result<String> {
        Ok(self.text())
    }

    fn line_text(&self, line: usize) -> Result<String> {
        self.lines.get(line).cloned().ok_or_else(|| {
            ChangelogWatchError::document(format!("Line {} is outside the document", line))
        })
    }

    fn line_count(&self) -> Result<usize> {
        Ok(self.lines.len())
    }

    fn apply_edit(&mut self, edits: &[Edit]) -> Result<()> {
        // Stage the batch on a copy so a rejected edit leaves the buffer
        // untouched.
        let mut staged = self.lines.clone();
        for edit in edits {
            Self::apply_one(&mut staged, edit)?;
        }
        self.lines = staged;
        Ok(())
    }
}
