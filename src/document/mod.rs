//! Document boundary abstraction
//!
//! This module provides a trait-based abstraction over the host editor's
//! text buffer, allowing for multiple implementations including an in-memory
//! buffer for the CLI host and a mock implementation for testing.
//!
//! The core only ever reads the full text and issues batched edits through
//! the handle; it never caches buffer state across invocations. The buffer
//! itself stays owned by the host.
//!
//! Implementations:
//!
//! - [buffer::BufferDocument]: in-memory line buffer backed by a file or string
//! - [mock::MockDocument]: records edit batches and can reject them on cue

pub mod buffer;
pub mod mock;

pub use buffer::BufferDocument;
pub use mock::MockDocument;

use crate::error::Result;

/// One edit operation inside a batch. Positions are zero-based
/// (line, column) coordinates into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Insert `text` before the character at (line, column). A line at or
    /// past the end of the document means "append at end".
    Insert {
        line: usize,
        column: usize,
        text: String,
    },
    /// Delete the half-open range from the start position to the end
    /// position. The range must lie within the document.
    Delete {
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    },
}

/// Handle to an externally owned, line-addressable text document.
///
/// Read methods return `Err` when no document is available (for example the
/// host has closed the editor); callers treat that as a silent abort, not a
/// fatal condition.
pub trait Document {
    /// Full text of the document
    fn full_text(&self) -> Result<String>;

    /// Text of one line, without its trailing newline
    fn line_text(&self, line: usize) -> Result<String>;

    /// Number of lines in the document
    fn line_count(&self) -> Result<usize>;

    /// Apply one batch of edits. The batch either applies as a whole or is
    /// rejected with an error; ordering between separate batches follows
    /// call order.
    fn apply_edit(&mut self, edits: &[Edit]) -> Result<()>;
}
