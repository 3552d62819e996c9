//! Note records.

use crate::richtext::{RichDoc, reading_time, word_count};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to newly created notes.
pub const NEW_NOTE_TITLE: &str = "New Note";

/// Heuristic feedback on a note's text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInsights {
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub suggested_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: RichDoc,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub ai_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<NoteInsights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub word_count: usize,
    /// Minutes.
    #[serde(default)]
    pub reading_time: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl Note {
    pub fn create(new: NewNote, now: DateTime<Utc>) -> Self {
        let mut note = Self {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            title: new.title,
            content: new.content,
            plain_text: new.plain_text,
            ai_summary: None,
            ai_tags: Vec::new(),
            ai_insights: None,
            folder_id: None,
            is_favorite: false,
            word_count: 0,
            reading_time: 0,
            created_at: now,
            updated_at: now,
            last_accessed_at: now,
        };
        note.refresh_stats();
        note
    }

    /// Merge `patch` and bump `updated_at`.
    pub fn apply(&mut self, patch: &NotePatch, now: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
            if patch.plain_text.is_none() {
                self.plain_text = content.plain_text();
            }
        }
        if let Some(plain_text) = &patch.plain_text {
            self.plain_text = plain_text.clone();
        }
        if let Some(favorite) = patch.is_favorite {
            self.is_favorite = favorite;
        }
        if let Some(summary) = &patch.ai_summary {
            self.ai_summary = Some(summary.clone());
        }
        if let Some(tags) = &patch.ai_tags {
            self.ai_tags = tags.clone();
        }
        if let Some(insights) = &patch.ai_insights {
            self.ai_insights = Some(insights.clone());
        }
        if let Some(folder) = &patch.folder_id {
            self.folder_id = Some(folder.clone());
        }
        self.refresh_stats();
        self.updated_at = now;
    }

    /// Case-insensitive match against title or plain text.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.plain_text.to_lowercase().contains(&query)
    }

    fn refresh_stats(&mut self) {
        self.word_count = word_count(&self.plain_text);
        self.reading_time = reading_time(self.word_count);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub user_id: String,
    pub title: String,
    pub content: RichDoc,
    pub plain_text: String,
}

impl NewNote {
    /// "New Note" with a single empty paragraph.
    pub fn blank(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            title: NEW_NOTE_TITLE.to_string(),
            content: RichDoc::blank(),
            plain_text: String::new(),
        }
    }
}

/// Partial note update. Fields left `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<RichDoc>,
    pub plain_text: Option<String>,
    pub is_favorite: Option<bool>,
    pub ai_summary: Option<String>,
    pub ai_tags: Option<Vec<String>>,
    pub ai_insights: Option<NoteInsights>,
    pub folder_id: Option<String>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Content edit with its plain-text projection.
    pub fn content(content: RichDoc) -> Self {
        Self {
            plain_text: Some(content.plain_text()),
            content: Some(content),
            ..Default::default()
        }
    }

    pub fn favorite(is_favorite: bool) -> Self {
        Self {
            is_favorite: Some(is_favorite),
            ..Default::default()
        }
    }

    /// Overlay `newer` on top of `self`; fields set in `newer` win.
    pub fn merge(self, newer: NotePatch) -> NotePatch {
        NotePatch {
            title: newer.title.or(self.title),
            content: newer.content.or(self.content),
            plain_text: newer.plain_text.or(self.plain_text),
            is_favorite: newer.is_favorite.or(self.is_favorite),
            ai_summary: newer.ai_summary.or(self.ai_summary),
            ai_tags: newer.ai_tags.or(self.ai_tags),
            ai_insights: newer.ai_insights.or(self.ai_insights),
            folder_id: newer.folder_id.or(self.folder_id),
        }
    }
}
