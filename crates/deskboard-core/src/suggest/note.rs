//! Writing heuristics and extractive summaries for notes.

use crate::records::NoteInsights;

const SHORT_NOTE_WORDS: usize = 50;
const LONG_NOTE_WORDS: usize = 500;
const LONG_SENTENCE_WORDS: f64 = 25.0;
const UNBROKEN_NOTE_WORDS: usize = 100;
const UNSTRUCTURED_NOTE_WORDS: usize = 200;
const SUMMARY_MIN_WORDS: usize = 20;
const MAX_SUGGESTED_TAGS: usize = 5;

/// Keyword groups mapped to a topic and the suggestion it triggers.
const TOPIC_RULES: &[(&[&str], &str, &str)] = &[
    (
        &["meeting", "discussion"],
        "meeting",
        "Add action items and follow-up tasks from the meeting",
    ),
    (
        &["project", "task"],
        "project",
        "Consider creating a todo list for project milestones",
    ),
    (
        &["idea", "brainstorm"],
        "brainstorming",
        "Explore related concepts and potential applications",
    ),
    (
        &["research", "study"],
        "research",
        "Add sources and references to support your research",
    ),
    (
        &["code", "programming"],
        "development",
        "Include code examples and technical specifications",
    ),
];

const SUMMARY_KEYWORDS: &[&str] = &["important", "key", "main", "conclusion", "result", "decision"];

fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether any line opens like a heading, bullet or numbered item.
fn has_structure(text: &str) -> bool {
    text.lines().any(|line| {
        if line.starts_with('#') || line.starts_with('*') || line.starts_with('-') {
            return true;
        }
        let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
        digits > 0 && line[digits..].starts_with('.')
    })
}

/// Analyze a note's plain text.
pub fn suggest_for_note(content: &str) -> NoteInsights {
    let text = content.to_lowercase();
    let words = text.split_whitespace().count();

    let mut suggestions = Vec::new();
    let mut improvements = Vec::new();
    let mut topics = Vec::new();

    if words < SHORT_NOTE_WORDS {
        suggestions.push("Consider expanding your ideas with more details and examples".to_string());
        improvements.push("Add more context to make your notes more comprehensive".to_string());
    }
    if words > LONG_NOTE_WORDS {
        suggestions.push("Consider breaking this into multiple notes for better organization".to_string());
        improvements.push("Use headings and bullet points to improve readability".to_string());
    }

    for (keywords, topic, suggestion) in TOPIC_RULES {
        if keywords.iter().any(|k| text.contains(k)) {
            topics.push(topic.to_string());
            suggestions.push(suggestion.to_string());
        }
    }

    let sentence_count = sentences(&text).len();
    if sentence_count > 0 && words as f64 / sentence_count as f64 > LONG_SENTENCE_WORDS {
        improvements.push("Consider shorter sentences for better readability".to_string());
    }
    if !text.contains('\n') && words > UNBROKEN_NOTE_WORDS {
        improvements.push("Use paragraphs to organize your thoughts better".to_string());
    }
    if words > UNSTRUCTURED_NOTE_WORDS && !has_structure(&text) {
        improvements.push("Add headings or bullet points to structure your content".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Your note looks good! Consider adding tags for better organization".to_string());
        suggestions.push("Think about connecting this note to related topics or projects".to_string());
    }

    let suggested_tags = topics.iter().take(MAX_SUGGESTED_TAGS).cloned().collect();
    NoteInsights {
        suggestions,
        improvements,
        topics,
        sentiment: if words > SHORT_NOTE_WORDS { "informative" } else { "brief" }.to_string(),
        suggested_tags,
    }
}

/// Extractive summary: the opening sentence plus the first sentence that
/// mentions a key term, or the closing sentence when none does.
pub fn summarize_note(content: &str) -> String {
    if content.split_whitespace().count() < SUMMARY_MIN_WORDS {
        return "Brief note with key points".to_string();
    }

    let sentences = sentences(content);
    if sentences.len() <= 2 {
        return format!("{}.", sentences.join(". ").trim());
    }

    let key = sentences.iter().find(|s| {
        let lower = s.to_lowercase();
        SUMMARY_KEYWORDS.iter().any(|k| lower.contains(k))
    });
    let second = key.or(sentences.last()).copied().unwrap_or_default();
    format!("{}.", [sentences[0], second].join(". ").trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["lorem"; n].join(" ")
    }

    #[test]
    fn test_short_note() {
        let insights = suggest_for_note("Buy milk");
        assert_eq!(
            insights.suggestions,
            ["Consider expanding your ideas with more details and examples"]
        );
        assert_eq!(
            insights.improvements,
            ["Add more context to make your notes more comprehensive"]
        );
        assert_eq!(insights.sentiment, "brief");
        assert!(insights.topics.is_empty());
    }

    #[test]
    fn test_topics_become_tags() {
        let insights = suggest_for_note("Meeting about the project. New idea for the code.");
        assert_eq!(insights.topics, ["meeting", "project", "brainstorming", "development"]);
        assert_eq!(insights.suggested_tags, insights.topics);
        assert!(
            insights
                .suggestions
                .contains(&"Add action items and follow-up tasks from the meeting".to_string())
        );
    }

    #[test]
    fn test_default_suggestions_for_plain_medium_note() {
        let text = format!("{}.", words(60));
        let insights = suggest_for_note(&text);
        assert_eq!(insights.suggestions.len(), 2);
        assert!(insights.suggestions[0].starts_with("Your note looks good!"));
        assert_eq!(insights.sentiment, "informative");
        assert_eq!(
            insights.improvements,
            ["Consider shorter sentences for better readability"]
        );
    }

    #[test]
    fn test_long_unstructured_note() {
        let text = words(600);
        let insights = suggest_for_note(&text);
        assert!(insights.improvements.contains(&"Use paragraphs to organize your thoughts better".to_string()));
        assert!(
            insights
                .improvements
                .contains(&"Add headings or bullet points to structure your content".to_string())
        );
        assert!(
            insights
                .suggestions
                .contains(&"Consider breaking this into multiple notes for better organization".to_string())
        );
    }

    #[test]
    fn test_bullets_count_as_structure() {
        let text = format!("# Heading\n{}\n- item", words(250));
        let insights = suggest_for_note(&text);
        assert!(
            !insights
                .improvements
                .contains(&"Add headings or bullet points to structure your content".to_string())
        );
        assert!(has_structure("intro\n12. step"));
        assert!(!has_structure("intro\n12 step"));
    }

    #[test]
    fn test_summary_of_brief_note() {
        assert_eq!(summarize_note("Just a few words"), "Brief note with key points");
    }

    #[test]
    fn test_summary_of_two_sentences() {
        let text = format!("{}. {}", words(12), words(12));
        assert_eq!(summarize_note(&text), format!("{}. {}.", words(12), words(12)));
    }

    #[test]
    fn test_summary_prefers_key_sentence() {
        let text = "We met on Monday with the whole team. Lunch was late. \
                    The decision was to ship Friday. Everyone went home.";
        assert_eq!(
            summarize_note(text),
            "We met on Monday with the whole team. The decision was to ship Friday."
        );
    }

    #[test]
    fn test_summary_falls_back_to_last_sentence() {
        let text = "We met on Monday with the whole team. Lunch was late. \
                    Nobody said much at all today. Everyone went home.";
        assert_eq!(
            summarize_note(text),
            "We met on Monday with the whole team. Everyone went home."
        );
    }
}
