use crate::document::{BufferDocument, Document, Edit};
use crate::error::{ChangelogWatchError, Result};

/// Mock document for testing without a real host buffer.
///
/// Wraps a [BufferDocument], records every edit batch it receives, and can
/// be scripted to reject a specific batch so tests can exercise insert and
/// delete failures independently.
pub struct MockDocument {
    buffer: BufferDocument,
    batches: Vec<Vec<Edit>>,
    reject_batch: Option<usize>,
    unreadable: bool,
}

impl MockDocument {
    /// Create a mock document over the given text
    pub fn new(text: &str) -> Self {
        MockDocument {
            buffer: BufferDocument::new(text),
            batches: Vec::new(),
            reject_batch: None,
            unreadable: false,
        }
    }

    /// Reject the nth edit batch (1-based) instead of applying it
    pub fn reject_batch(&mut self, nth: usize) {
        self.reject_batch = Some(nth);
    }

    /// Make every read fail, simulating a document the host has closed
    pub fn make_unreadable(&mut self) {
        self.unreadable = true;
    }

    /// Every edit batch received so far, in call order
    pub fn batches(&self) -> &[Vec<Edit>] {
        &self.batches
    }

    /// Current text of the underlying buffer
    pub fn text(&self) -> String {
        self.buffer.text()
    }
}

impl Document for MockDocument {
    fn full_text(&self) -> Result<String> {
        if self.unreadable {
            return Err(ChangelogWatchError::document("no open document"));
        }
        self.buffer.full_text()
    }

    fn line_text(&self, line: usize) -> Result<String> {
        if self.unreadable {
            return Err(ChangelogWatchError::document("no open document"));
        }
        self.buffer.line_text(line)
    }

    fn line_count(&self) -> Result<usize> {
        if self.unreadable {
            return Err(ChangelogWatchError::document("no open document"));
        }
        self.buffer.line_count()
    }

    fn apply_edit(&mut self, edits: &[Edit]) -> Result<()> {
        self.batches.push(edits.to_vec());
        if self.reject_batch == Some(self.batches.len()) {
            return Err(ChangelogWatchError::edit("host rejected the edit"));
        }
        self.buffer.apply_edit(edits)
    }
}
