//! Rich text documents for notes.
//!
//! The tree is the editor's JSON document format: every node carries a
//! `"type"` tag and block nodes hold their children under `"content"`.
//! Plain text and HTML are two folds over the same tree.

use serde::{Deserialize, Serialize};

/// Average reading speed used for `reading_time`.
pub const WORDS_PER_MINUTE: usize = 200;

/// Inline formatting on a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
    /// Marks this build does not know; dropped from output.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

impl Default for HeadingAttrs {
    fn default() -> Self {
        Self { level: 1 }
    }
}

/// A node in a rich text tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RichNode {
    Text {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
    Paragraph {
        #[serde(default)]
        content: Vec<RichNode>,
    },
    Heading {
        #[serde(default)]
        attrs: HeadingAttrs,
        #[serde(default)]
        content: Vec<RichNode>,
    },
    BulletList {
        #[serde(default)]
        content: Vec<RichNode>,
    },
    OrderedList {
        #[serde(default)]
        content: Vec<RichNode>,
    },
    ListItem {
        #[serde(default)]
        content: Vec<RichNode>,
    },
    Blockquote {
        #[serde(default)]
        content: Vec<RichNode>,
    },
    /// Node types this build does not know; contributes nothing to output.
    #[serde(other)]
    Unknown,
}

impl RichNode {
    pub fn text(text: impl Into<String>) -> Self {
        RichNode::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn paragraph(content: Vec<RichNode>) -> Self {
        RichNode::Paragraph { content }
    }

    fn children(&self) -> &[RichNode] {
        match self {
            RichNode::Paragraph { content }
            | RichNode::Heading { content, .. }
            | RichNode::BulletList { content }
            | RichNode::OrderedList { content }
            | RichNode::ListItem { content }
            | RichNode::Blockquote { content } => content,
            RichNode::Text { .. } | RichNode::Unknown => &[],
        }
    }

    fn write_plain(&self, out: &mut String) {
        if let RichNode::Text { text, .. } = self {
            out.push_str(text);
            return;
        }
        for child in self.children() {
            child.write_plain(out);
        }
        if matches!(self, RichNode::Paragraph { .. } | RichNode::Heading { .. }) {
            out.push('\n');
        }
    }

    fn write_html(&self, out: &mut String) {
        let tag = match self {
            RichNode::Text { text, marks } => {
                out.push_str(&marked_html(text, marks));
                return;
            }
            RichNode::Unknown => return,
            RichNode::Paragraph { .. } => "p".to_string(),
            RichNode::Heading { attrs, .. } => format!("h{}", attrs.level.clamp(1, 6)),
            RichNode::BulletList { .. } => "ul".to_string(),
            RichNode::OrderedList { .. } => "ol".to_string(),
            RichNode::ListItem { .. } => "li".to_string(),
            RichNode::Blockquote { .. } => "blockquote".to_string(),
        };
        out.push('<');
        out.push_str(&tag);
        out.push('>');
        for child in self.children() {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&tag);
        out.push('>');
    }
}

/// Wrap escaped text in its marks; the first mark is innermost.
fn marked_html(text: &str, marks: &[Mark]) -> String {
    marks.iter().fold(escape_html(text), |inner, mark| match mark {
        Mark::Bold => format!("<strong>{inner}</strong>"),
        Mark::Italic => format!("<em>{inner}</em>"),
        Mark::Underline => format!("<u>{inner}</u>"),
        Mark::Code => format!("<code>{inner}</code>"),
        Mark::Unknown => inner,
    })
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Root of a rich text tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "doc")]
pub struct RichDoc {
    #[serde(default)]
    pub content: Vec<RichNode>,
}

impl RichDoc {
    pub fn new(content: Vec<RichNode>) -> Self {
        Self { content }
    }

    /// The document a freshly created note starts with: one empty paragraph.
    pub fn blank() -> Self {
        Self::new(vec![RichNode::paragraph(vec![RichNode::text("")])])
    }

    /// One paragraph per line of `text`.
    pub fn from_plain_text(text: &str) -> Self {
        let content = text
            .lines()
            .map(|line| {
                if line.is_empty() {
                    RichNode::paragraph(Vec::new())
                } else {
                    RichNode::paragraph(vec![RichNode::text(line)])
                }
            })
            .collect::<Vec<_>>();
        if content.is_empty() {
            return Self::blank();
        }
        Self::new(content)
    }

    /// Parse a stored document, degrading to an empty one when malformed.
    pub fn from_json_lossy(value: &serde_json::Value) -> Self {
        match serde_json::from_value(value.clone()) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Malformed rich text document, showing it empty: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Text content with a newline after each paragraph and heading, trimmed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.content {
            node.write_plain(&mut out);
        }
        out.trim().to_string()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.content {
            node.write_html(&mut out);
        }
        out
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.plain_text())
    }

    /// Estimated minutes to read.
    pub fn reading_time(&self) -> usize {
        reading_time(self.word_count())
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes to read `words` words, rounded up.
pub fn reading_time(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "type": "doc",
            "content": [
                { "type": "heading", "attrs": { "level": 2 }, "content": [
                    { "type": "text", "text": "Plan" }
                ]},
                { "type": "paragraph", "content": [
                    { "type": "text", "text": "Ship " },
                    { "type": "text", "text": "it", "marks": [{ "type": "bold" }, { "type": "italic" }] }
                ]},
                { "type": "bulletList", "content": [
                    { "type": "listItem", "content": [
                        { "type": "paragraph", "content": [{ "type": "text", "text": "a < b" }] }
                    ]}
                ]}
            ]
        })
    }

    #[test]
    fn test_plain_text_fold() {
        let doc = RichDoc::from_json_lossy(&sample());
        assert_eq!(doc.plain_text(), "Plan\nShip it\na < b");
    }

    #[test]
    fn test_html_fold() {
        let doc = RichDoc::from_json_lossy(&sample());
        assert_eq!(
            doc.to_html(),
            "<h2>Plan</h2><p>Ship <em><strong>it</strong></em></p>\
             <ul><li><p>a &lt; b</p></li></ul>"
        );
    }

    #[test]
    fn test_unknown_nodes_and_marks_are_tolerated() {
        let value = json!({
            "type": "doc",
            "content": [
                { "type": "horizontalRule" },
                { "type": "paragraph", "content": [
                    { "type": "text", "text": "x", "marks": [{ "type": "strike" }] }
                ]}
            ]
        });
        let doc = RichDoc::from_json_lossy(&value);
        assert_eq!(doc.plain_text(), "x");
        assert_eq!(doc.to_html(), "<p>x</p>");
    }

    #[test]
    fn test_malformed_document_is_empty() {
        let doc = RichDoc::from_json_lossy(&json!({ "type": "doc", "content": 7 }));
        assert_eq!(doc, RichDoc::default());
        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn test_blank_document() {
        let doc = RichDoc::blank();
        assert_eq!(doc.plain_text(), "");
        assert_eq!(doc.word_count(), 0);
        assert_eq!(doc.reading_time(), 0);
    }

    #[test]
    fn test_from_plain_text_keeps_lines() {
        let doc = RichDoc::from_plain_text("one two\n\nthree");
        assert_eq!(doc.content.len(), 3);
        assert_eq!(doc.plain_text(), "one two\n\nthree");
        assert_eq!(doc.word_count(), 3);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        assert_eq!(reading_time(1), 1);
        assert_eq!(reading_time(200), 1);
        assert_eq!(reading_time(201), 2);
    }
}
