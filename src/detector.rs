//! Trigger detection and re-entrancy guarding.
//!
//! The host delivers document-change notifications; the detector inspects
//! each one for a trigger token and hands matches to the
//! [ChangelogMutator](crate::changelog::ChangelogMutator). A per-detector
//! latch keeps a second matching event from starting an update while one is
//! already in flight; latched events are silently dropped, not queued.

use std::cell::Cell;

use crate::changelog::{ChangelogMutator, UpdateOutcome};
use crate::config::{Config, DetectionMode};
use crate::document::Document;
use crate::domain::TriggerOccurrence;
use crate::error::Result;

/// One document-change notification from the host.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// Line the change applies to (the active line for interactive hosts).
    /// `None` when the host has no line to report, e.g. no active editor.
    pub line: Option<usize>,
    /// Literal text inserted by this change
    pub inserted_text: String,
}

impl ChangeEvent {
    /// Event for a change on a known line
    pub fn on_line(line: usize, inserted_text: impl Into<String>) -> Self {
        ChangeEvent {
            line: Some(line),
            inserted_text: inserted_text.into(),
        }
    }
}

/// Watches change events for trigger tokens and runs updates.
///
/// The latch is instance state, not a process-wide global: each detector
/// guards its own updates.
pub struct TriggerDetector {
    mode: DetectionMode,
    mutator: ChangelogMutator,
    busy: Cell<bool>,
}

impl TriggerDetector {
    /// Create a detector with an explicit mode and mutator
    pub fn new(mode: DetectionMode, mutator: ChangelogMutator) -> Self {
        TriggerDetector {
            mode,
            mutator,
            busy: Cell::new(false),
        }
    }

    /// Create a detector from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        TriggerDetector::new(
            config.watcher.detection_mode,
            ChangelogMutator::from_config(config),
        )
    }

    /// Whether an update is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Handle one change notification.
    ///
    /// Returns `Ok(None)` when nothing happened: no line in the event, no
    /// readable document, no trigger match, or an update already in flight.
    /// Returns `Ok(Some(outcome))` after running an update. `Err` means the
    /// update failed before issuing any edit; the latch is released either
    /// way and the detector keeps observing future events.
    pub fn handle_change<D: Document>(
        &self,
        doc: &mut D,
        event: &ChangeEvent,
    ) -> Result<Option<UpdateOutcome>> {
        let line = match event.line {
            Some(line) => line,
            None => return Ok(None),
        };

        let occurrence = match self.mode {
            DetectionMode::ActiveLine => {
                // A document the host cannot read is a silent abort
                let text = match doc.line_text(line) {
                    Ok(text) => text,
                    Err(_) => return Ok(None),
                };
                TriggerOccurrence::from_line(line, &text)
            }
            DetectionMode::InsertedText => TriggerOccurrence::from_line(line, &event.inserted_text),
        };

        let occurrence = match occurrence {
            Some(occurrence) => occurrence,
            None => return Ok(None),
        };

        if self.busy.get() {
            return Ok(None);
        }
        self.busy.set(true);

        let result = self
            .mutator
            .apply_update(doc, occurrence.bump, occurrence.category, occurrence.line);

        // Released unconditionally, including on failure, so one bad update
        // can never lock the detector out permanently.
        self.busy.set(false);

        result.map(Some)
    }
}
