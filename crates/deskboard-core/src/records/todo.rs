//! Task records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PRIORITY_HIGH: u8 = 1;
pub const PRIORITY_MEDIUM: u8 = 2;
pub const PRIORITY_LOW: u8 = 3;

/// Display label for a numeric priority.
pub fn priority_label(priority: u8) -> &'static str {
    match priority {
        PRIORITY_HIGH => "High",
        PRIORITY_MEDIUM => "Medium",
        PRIORITY_LOW => "Low",
        _ => "Normal",
    }
}

/// Heuristic advice attached to a task when it is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSuggestions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_priority: Option<u8>,
    pub priority_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    #[serde(default)]
    pub suggested_tags: Vec<String>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// 1 high, 2 medium, 3 low.
    pub priority: u8,
    /// Heuristic urgency in `0.0..=1.0`.
    pub ai_priority_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggestions: Option<TaskSuggestions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_duration: Option<u32>,
}

impl Todo {
    /// Materialize an insert with a fresh id and timestamps.
    pub fn create(new: NewTodo, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            title: new.title,
            description: new.description,
            completed: false,
            priority: new.priority,
            ai_priority_score: new.ai_priority_score,
            ai_suggestions: new.ai_suggestions,
            due_date: new.due_date,
            created_at: now,
            updated_at: now,
            tags: new.tags,
            estimated_duration: new.estimated_duration,
            actual_duration: None,
        }
    }

    pub fn apply(&mut self, patch: &TodoPatch, now: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(actual) = patch.actual_duration {
            self.actual_duration = Some(actual);
        }
        self.updated_at = now;
    }

    pub fn priority_label(&self) -> &'static str {
        priority_label(self.priority)
    }
}

/// Fields supplied when inserting a task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: u8,
    pub ai_priority_score: f64,
    pub ai_suggestions: Option<TaskSuggestions>,
    pub due_date: Option<DateTime<Utc>>,
    pub estimated_duration: Option<u32>,
    pub tags: Vec<String>,
}

impl NewTodo {
    /// Insert payload seeded from heuristic suggestions.
    pub fn with_suggestions(user_id: &str, title: &str, suggestions: TaskSuggestions) -> Self {
        Self {
            user_id: user_id.to_string(),
            title: title.to_string(),
            description: None,
            priority: suggestions.suggested_priority.unwrap_or(PRIORITY_MEDIUM),
            ai_priority_score: suggestions.priority_score,
            estimated_duration: suggestions.estimated_duration,
            tags: suggestions.suggested_tags.clone(),
            ai_suggestions: Some(suggestions),
            due_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<u8>,
    pub tags: Option<Vec<String>>,
    pub due_date: Option<DateTime<Utc>>,
    pub actual_duration: Option<u32>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_labels() {
        assert_eq!(priority_label(1), "High");
        assert_eq!(priority_label(2), "Medium");
        assert_eq!(priority_label(3), "Low");
        assert_eq!(priority_label(0), "Normal");
    }

    #[test]
    fn test_new_todo_defaults_to_medium() {
        let suggestions = TaskSuggestions {
            priority_score: 0.5,
            ..Default::default()
        };
        let new = NewTodo::with_suggestions("u1", "Water plants", suggestions);
        assert_eq!(new.priority, PRIORITY_MEDIUM);
        assert!(new.tags.is_empty());
    }

    #[test]
    fn test_apply_bumps_updated_at() {
        let t0 = Utc::now();
        let new = NewTodo::with_suggestions("u1", "Call mom", TaskSuggestions::default());
        let mut todo = Todo::create(new, t0);
        let t1 = t0 + chrono::Duration::seconds(5);

        todo.apply(&TodoPatch::completed(true), t1);
        assert!(todo.completed);
        assert_eq!(todo.created_at, t0);
        assert_eq!(todo.updated_at, t1);
    }

    #[test]
    fn test_suggestions_serialize_camel_case() {
        let suggestions = TaskSuggestions {
            suggested_priority: Some(1),
            priority_score: 0.9,
            ..Default::default()
        };
        let json = serde_json::to_value(&suggestions).unwrap();
        assert_eq!(json["suggestedPriority"], 1);
        assert_eq!(json["priorityScore"], 0.9);
    }
}
