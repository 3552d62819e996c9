//! Keyword heuristics for new tasks.

use crate::records::{PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM, TaskSuggestions, Todo};

/// Active-task count above which the workload warning fires.
pub const BUSY_THRESHOLD: usize = 10;

/// Keyword groups checked in order; the first match sets priority and score.
const PRIORITY_RULES: &[(&[&str], u8, f64)] = &[
    (&["urgent", "asap", "emergency", "critical"], PRIORITY_HIGH, 0.9),
    (&["meeting", "deadline", "due", "call"], PRIORITY_HIGH, 0.7),
    (&["research", "plan", "think", "consider"], PRIORITY_LOW, 0.3),
];

/// Keyword groups checked in order; the first match sets the duration in minutes.
const DURATION_RULES: &[(&[&str], u32)] = &[
    (&["quick", "brief", "check"], 15),
    (&["review", "analyze", "write"], 60),
    (&["project", "develop", "create"], 120),
];

const DEFAULT_DURATION: u32 = 30;

/// Every matching group contributes its tag.
const TAG_RULES: &[(&[&str], &str)] = &[
    (&["meeting", "call"], "meeting"),
    (&["email", "message"], "communication"),
    (&["code", "develop", "bug"], "development"),
    (&["design", "ui", "ux"], "design"),
    (&["research", "learn"], "research"),
    (&["buy", "purchase", "order"], "shopping"),
];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

fn first_word(text: &str) -> &str {
    text.split(' ').next().unwrap_or("")
}

/// Suggest priority, duration and tags for a task titled `title`, given the
/// user's current list.
pub fn suggest_for_task(title: &str, existing: &[Todo]) -> TaskSuggestions {
    let title = title.to_lowercase();

    let (suggested_priority, priority_score) = PRIORITY_RULES
        .iter()
        .find(|(words, _, _)| contains_any(&title, words))
        .map(|&(_, priority, score)| (priority, score))
        .unwrap_or((PRIORITY_MEDIUM, 0.5));

    let estimated_duration = DURATION_RULES
        .iter()
        .find(|(words, _)| contains_any(&title, words))
        .map(|&(_, minutes)| minutes)
        .unwrap_or(DEFAULT_DURATION);

    let suggested_tags = TAG_RULES
        .iter()
        .filter(|(words, _)| contains_any(&title, words))
        .map(|(_, tag)| tag.to_string())
        .collect();

    let mut insights = Vec::new();
    let mut recommendations = Vec::new();

    let lead = first_word(&title);
    let similar = existing
        .iter()
        .filter(|todo| {
            let other = todo.title.to_lowercase();
            other.contains(lead) || title.contains(first_word(&other))
        })
        .count();
    if similar > 0 {
        insights.push(format!("Found {} similar task(s) in your list", similar));
        recommendations.push("Consider grouping related tasks together".to_string());
    }

    let active = existing.iter().filter(|t| !t.completed).count();
    if active > BUSY_THRESHOLD {
        insights.push("You have a high number of active tasks".to_string());
        recommendations.push("Consider completing some existing tasks before adding more".to_string());
    }

    TaskSuggestions {
        suggested_priority: Some(suggested_priority),
        priority_score,
        estimated_duration: Some(estimated_duration),
        suggested_tags,
        insights,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::NewTodo;
    use chrono::Utc;

    fn todo(title: &str, completed: bool) -> Todo {
        let mut todo = Todo::create(
            NewTodo::with_suggestions("u1", title, TaskSuggestions::default()),
            Utc::now(),
        );
        todo.completed = completed;
        todo
    }

    #[test]
    fn test_urgent_beats_meeting() {
        let s = suggest_for_task("URGENT meeting prep", &[]);
        assert_eq!(s.suggested_priority, Some(1));
        assert_eq!(s.priority_score, 0.9);
        assert_eq!(s.suggested_tags, ["meeting"]);
    }

    #[test]
    fn test_research_is_low_priority() {
        let s = suggest_for_task("Research vendors", &[]);
        assert_eq!(s.suggested_priority, Some(3));
        assert_eq!(s.priority_score, 0.3);
        assert_eq!(s.suggested_tags, ["research"]);
    }

    #[test]
    fn test_defaults() {
        let s = suggest_for_task("Water the garden", &[]);
        assert_eq!(s.suggested_priority, Some(2));
        assert_eq!(s.priority_score, 0.5);
        assert_eq!(s.estimated_duration, Some(30));
        assert!(s.suggested_tags.is_empty());
        assert!(s.insights.is_empty());
    }

    #[test]
    fn test_duration_rules() {
        assert_eq!(suggest_for_task("quick email", &[]).estimated_duration, Some(15));
        assert_eq!(suggest_for_task("write report", &[]).estimated_duration, Some(60));
        assert_eq!(suggest_for_task("develop api", &[]).estimated_duration, Some(120));
    }

    #[test]
    fn test_multiple_tags() {
        let s = suggest_for_task("Email about the ui bug", &[]);
        assert_eq!(s.suggested_tags, ["communication", "development", "design"]);
    }

    #[test]
    fn test_similar_tasks() {
        let existing = vec![todo("Buy milk", false), todo("Fix sink", false)];
        let s = suggest_for_task("buy bread", &existing);
        assert_eq!(s.insights, ["Found 1 similar task(s) in your list"]);
        assert_eq!(s.recommendations, ["Consider grouping related tasks together"]);
    }

    #[test]
    fn test_busy_list_warning() {
        let existing: Vec<_> = (0..11).map(|i| todo(&format!("item{i}"), false)).collect();
        let s = suggest_for_task("zzz", &existing);
        assert!(s.insights.contains(&"You have a high number of active tasks".to_string()));

        let mostly_done: Vec<_> = (0..11).map(|i| todo(&format!("item{i}"), i > 0)).collect();
        let s = suggest_for_task("zzz", &mostly_done);
        assert!(s.insights.is_empty());
    }
}
