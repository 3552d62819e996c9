//! Debounced note persistence.
//!
//! Every edit to a note restarts that note's quiet window. When the window
//! elapses without further edits the accumulated patch is handed back for
//! saving. Notes are tracked independently, so editing one never delays or
//! drops another's pending save.

use crate::records::NotePatch;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Quiet period before an edited note is saved.
pub const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u64 = 1000;

#[derive(Debug)]
struct PendingSave {
    patch: NotePatch,
    due: Instant,
}

/// Per-note debounce timers for note edits.
#[derive(Debug)]
pub struct NoteAutoSaver {
    delay: Duration,
    pending: HashMap<String, PendingSave>,
}

impl Default for NoteAutoSaver {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_AUTOSAVE_DEBOUNCE_MS))
    }
}

impl NoteAutoSaver {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: HashMap::new(),
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an edit to `note_id` and restart its window.
    pub fn schedule(&mut self, note_id: &str, patch: NotePatch) {
        self.schedule_at(note_id, patch, Instant::now());
    }

    /// Record an edit made at `now`.
    ///
    /// Fields in `patch` overwrite the same fields of any pending edit for
    /// this note; the window restarts from `now`.
    pub fn schedule_at(&mut self, note_id: &str, patch: NotePatch, now: Instant) {
        let due = now + self.delay;
        let patch = match self.pending.remove(note_id) {
            Some(prior) => prior.patch.merge(patch),
            None => patch,
        };
        self.pending.insert(note_id.to_string(), PendingSave { patch, due });
    }

    /// Remove and return the edits whose window has elapsed at `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<(String, NotePatch)> {
        let due: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, p)| p.due <= now)
            .map(|(id, _)| id.clone())
            .collect();
        due.into_iter()
            .filter_map(|id| self.pending.remove(&id).map(|p| (id, p.patch)))
            .collect()
    }

    /// Remove and return every pending edit regardless of timing.
    pub fn flush_all(&mut self) -> Vec<(String, NotePatch)> {
        self.pending.drain().map(|(id, p)| (id, p.patch)).collect()
    }

    /// Drop the pending edit for `note_id`, if any.
    pub fn cancel(&mut self, note_id: &str) -> Option<NotePatch> {
        self.pending.remove(note_id).map(|p| p.patch)
    }

    pub fn is_pending(&self, note_id: &str) -> bool {
        self.pending.contains_key(note_id)
    }

    /// The unsaved edit for `note_id`.
    pub fn pending(&self, note_id: &str) -> Option<&NotePatch> {
        self.pending.get(note_id).map(|p| &p.patch)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Earliest moment a pending edit becomes due.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.due).min()
    }
}
