//! Note browser and editor panel.

use super::PanelError;
use crate::records::{NewNote, Note, NotePatch};
use crate::storage::{NoteAutoSaver, NoteStore};
use crate::suggest::{suggest_for_note, summarize_note};
use std::time::{Duration, Instant};

/// A user's notes as shown in a notes widget.
///
/// Editor changes are held per note until the autosave window elapses;
/// the list only reflects what the store has accepted.
#[derive(Debug, Default)]
pub struct NotesPanel {
    user_id: String,
    notes: Vec<Note>,
    loaded: bool,
    selected: Option<String>,
    search: String,
    autosaver: NoteAutoSaver,
    suggestions: Vec<String>,
    last_error: Option<String>,
}

impl NotesPanel {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn with_autosave_delay(mut self, delay: Duration) -> Self {
        self.autosaver.set_delay(delay);
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    // --- Search -------------------------------------------------------------

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Notes whose title or text contains the search query, case-insensitively.
    pub fn filtered(&self) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.matches(&self.search)).collect()
    }

    // --- Selection ----------------------------------------------------------

    pub fn select(&mut self, id: &str) {
        if self.note(id).is_some() {
            self.selected = Some(id.to_string());
            self.suggestions.clear();
        }
    }

    pub fn close_editor(&mut self) {
        self.selected = None;
        self.suggestions.clear();
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected note with any unsaved edits applied.
    pub fn draft(&self) -> Option<Note> {
        let id = self.selected.as_deref()?;
        let mut note = self.note(id)?.clone();
        if let Some(patch) = self.autosaver.pending(id) {
            note.apply(patch, note.updated_at);
        }
        Some(note)
    }

    // --- Store operations ---------------------------------------------------

    pub async fn load(&mut self, store: &dyn NoteStore) -> Result<(), PanelError> {
        let result = store.list_notes(&self.user_id).await;
        self.loaded = true;
        self.notes = self.check("fetching notes", result)?;
        Ok(())
    }

    /// Create a blank note, put it first and open it.
    pub async fn create(&mut self, store: &dyn NoteStore) -> Result<String, PanelError> {
        let result = store.insert_note(NewNote::blank(&self.user_id)).await;
        let note = self.check("creating note", result)?;
        let id = note.id.clone();
        log::info!("Created note {}", id);
        self.notes.insert(0, note);
        self.selected = Some(id.clone());
        Ok(id)
    }

    /// Queue an editor change; it is saved once the note has been quiet
    /// for the autosave window.
    pub fn edit(&mut self, note_id: &str, patch: NotePatch) -> Result<(), PanelError> {
        self.edit_at(note_id, patch, Instant::now())
    }

    pub fn edit_at(&mut self, note_id: &str, patch: NotePatch, now: Instant) -> Result<(), PanelError> {
        if self.note(note_id).is_none() {
            return Err(PanelError::UnknownNote(note_id.to_string()));
        }
        self.autosaver.schedule_at(note_id, patch, now);
        Ok(())
    }

    /// Save edits whose window has elapsed at `now`. Returns how many were saved.
    pub async fn save_due(&mut self, store: &dyn NoteStore, now: Instant) -> Result<usize, PanelError> {
        let due = self.autosaver.take_due(now);
        self.persist(store, due).await
    }

    /// Save every queued edit immediately.
    pub async fn flush(&mut self, store: &dyn NoteStore) -> Result<usize, PanelError> {
        let all = self.autosaver.flush_all();
        self.persist(store, all).await
    }

    pub fn has_unsaved_edits(&self) -> bool {
        self.autosaver.pending_count() > 0
    }

    pub fn next_save_due(&self) -> Option<Instant> {
        self.autosaver.next_due()
    }

    async fn persist(
        &mut self,
        store: &dyn NoteStore,
        edits: Vec<(String, NotePatch)>,
    ) -> Result<usize, PanelError> {
        let mut saved = 0;
        let mut first_error = None;
        for (id, patch) in edits {
            let result = store.update_note(&id, patch).await;
            match self.check("updating note", result) {
                Ok(note) => {
                    self.replace(note);
                    saved += 1;
                }
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(saved),
        }
    }

    pub async fn delete(&mut self, store: &dyn NoteStore, id: &str) -> Result<(), PanelError> {
        let result = store.delete_note(id).await;
        self.check("deleting note", result)?;
        self.autosaver.cancel(id);
        self.notes.retain(|n| n.id != id);
        if self.selected.as_deref() == Some(id) {
            self.close_editor();
        }
        Ok(())
    }

    pub async fn toggle_favorite(&mut self, store: &dyn NoteStore, id: &str) -> Result<(), PanelError> {
        let current = self
            .note(id)
            .map(|n| n.is_favorite)
            .ok_or_else(|| PanelError::UnknownNote(id.to_string()))?;
        let result = store.update_note(id, NotePatch::favorite(!current)).await;
        let note = self.check("updating note", result)?;
        self.replace(note);
        Ok(())
    }

    // --- Suggestions --------------------------------------------------------

    /// Writing suggestions for the given editor text. Blank text is ignored.
    pub fn request_suggestions(&mut self, text: &str) -> &[String] {
        if !text.trim().is_empty() {
            self.suggestions = suggest_for_note(text).suggestions;
        }
        &self.suggestions
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Compute and store a summary, insights and tags for a note.
    pub async fn analyze(&mut self, store: &dyn NoteStore, id: &str) -> Result<(), PanelError> {
        let text = self
            .note(id)
            .map(|n| n.plain_text.clone())
            .ok_or_else(|| PanelError::UnknownNote(id.to_string()))?;
        let insights = suggest_for_note(&text);
        let patch = NotePatch {
            ai_summary: Some(summarize_note(&text)),
            ai_tags: Some(insights.suggested_tags.clone()),
            ai_insights: Some(insights),
            ..Default::default()
        };
        let result = store.update_note(id, patch).await;
        let note = self.check("analyzing note", result)?;
        self.replace(note);
        Ok(())
    }

    fn replace(&mut self, note: Note) {
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note;
        }
    }

    fn check<T, E: Into<PanelError>>(&mut self, action: &str, result: Result<T, E>) -> Result<T, PanelError> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Ok(value)
            }
            Err(e) => {
                let e = e.into();
                log::error!("Error {}: {}", action, e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::tests::OfflineStore;
    use crate::richtext::RichDoc;
    use crate::storage::MemoryStore;
    use crate::testing::block_on;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_create_opens_blank_note() {
        let store = MemoryStore::new();
        let mut panel = NotesPanel::new("u1");
        let id = block_on(panel.create(&store)).unwrap();

        assert_eq!(panel.selected_id(), Some(id.as_str()));
        let note = panel.note(&id).unwrap();
        assert_eq!(note.title, "New Note");
        assert_eq!(note.plain_text, "");
    }

    #[test]
    fn test_edits_are_debounced() {
        let store = MemoryStore::new();
        let mut panel = NotesPanel::new("u1");
        let id = block_on(panel.create(&store)).unwrap();
        let t0 = Instant::now();

        panel.edit_at(&id, NotePatch::title("Dra"), t0).unwrap();
        panel.edit_at(&id, NotePatch::title("Draft"), t0 + ms(400)).unwrap();
        assert_eq!(panel.draft().unwrap().title, "Draft");
        assert_eq!(panel.note(&id).unwrap().title, "New Note");

        assert_eq!(block_on(panel.save_due(&store, t0 + ms(1000))).unwrap(), 0);
        assert_eq!(block_on(panel.save_due(&store, t0 + ms(1400))).unwrap(), 1);
        assert_eq!(panel.note(&id).unwrap().title, "Draft");
        assert!(!panel.has_unsaved_edits());
    }

    #[test]
    fn test_content_edit_updates_stats() {
        let store = MemoryStore::new();
        let mut panel = NotesPanel::new("u1");
        let id = block_on(panel.create(&store)).unwrap();

        let doc = RichDoc::from_plain_text("alpha beta gamma");
        panel.edit(&id, NotePatch::content(doc)).unwrap();
        assert_eq!(block_on(panel.flush(&store)).unwrap(), 1);

        let note = panel.note(&id).unwrap();
        assert_eq!(note.plain_text, "alpha beta gamma");
        assert_eq!(note.word_count, 3);
        assert_eq!(note.reading_time, 1);
    }

    #[test]
    fn test_edit_unknown_note() {
        let mut panel = NotesPanel::new("u1");
        let result = panel.edit("ghost", NotePatch::title("x"));
        assert!(matches!(result, Err(PanelError::UnknownNote(_))));
    }

    #[test]
    fn test_search_filters_title_and_text() {
        let store = MemoryStore::new();
        let mut panel = NotesPanel::new("u1");
        let a = block_on(panel.create(&store)).unwrap();
        let b = block_on(panel.create(&store)).unwrap();
        panel.edit(&a, NotePatch::content(RichDoc::from_plain_text("Buy Oat milk"))).unwrap();
        panel.edit(&b, NotePatch::title("Trip plan")).unwrap();
        block_on(panel.flush(&store)).unwrap();

        panel.set_search("OAT");
        let hits: Vec<_> = panel.filtered().iter().map(|n| n.id.clone()).collect();
        assert_eq!(hits, vec![a.clone()]);

        panel.set_search("");
        assert_eq!(panel.filtered().len(), 2);
    }

    #[test]
    fn test_delete_cancels_pending_edit_and_closes_editor() {
        let store = MemoryStore::new();
        let mut panel = NotesPanel::new("u1");
        let id = block_on(panel.create(&store)).unwrap();
        panel.edit(&id, NotePatch::title("doomed")).unwrap();

        block_on(panel.delete(&store, &id)).unwrap();
        assert!(panel.notes().is_empty());
        assert!(panel.selected_id().is_none());
        assert!(!panel.has_unsaved_edits());
    }

    #[test]
    fn test_toggle_favorite() {
        let store = MemoryStore::new();
        let mut panel = NotesPanel::new("u1");
        let id = block_on(panel.create(&store)).unwrap();
        block_on(panel.toggle_favorite(&store, &id)).unwrap();
        assert!(panel.note(&id).unwrap().is_favorite);
    }

    #[test]
    fn test_failed_save_keeps_list_unchanged() {
        let store = MemoryStore::new();
        let mut panel = NotesPanel::new("u1");
        let id = block_on(panel.create(&store)).unwrap();
        let before = panel.notes().to_vec();

        panel.edit(&id, NotePatch::title("never saved")).unwrap();
        assert!(block_on(panel.flush(&OfflineStore)).is_err());
        assert!(block_on(panel.toggle_favorite(&OfflineStore, &id)).is_err());
        assert!(block_on(panel.delete(&OfflineStore, &id)).is_err());

        assert_eq!(panel.notes(), before.as_slice());
        assert!(panel.last_error().is_some());
    }

    #[test]
    fn test_suggestions_ignore_blank_text() {
        let mut panel = NotesPanel::new("u1");
        assert!(panel.request_suggestions("   ").is_empty());
        let suggestions = panel.request_suggestions("Project kickoff").to_vec();
        assert!(suggestions.contains(&"Consider creating a todo list for project milestones".to_string()));
    }

    #[test]
    fn test_analyze_stores_summary_and_tags() {
        let store = MemoryStore::new();
        let mut panel = NotesPanel::new("u1");
        let id = block_on(panel.create(&store)).unwrap();
        panel
            .edit(&id, NotePatch::content(RichDoc::from_plain_text("Research notes")))
            .unwrap();
        block_on(panel.flush(&store)).unwrap();

        block_on(panel.analyze(&store, &id)).unwrap();
        let note = panel.note(&id).unwrap();
        assert_eq!(note.ai_summary.as_deref(), Some("Brief note with key points"));
        assert_eq!(note.ai_tags, ["research"]);
    }
}
