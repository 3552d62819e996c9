//! What each widget shows inside its frame.

use crate::auth::UserIdentity;
use crate::widget::{Widget, WidgetKind};

/// Text block shown by widgets that have no live content yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub footer: &'static str,
    /// Accent color name from the dashboard palette.
    pub accent: &'static str,
}

pub const CALENDAR_PLACEHOLDER: Placeholder = Placeholder {
    heading: "Smart Calendar",
    blurb: "Intelligent scheduling with conflict detection and AI suggestions",
    footer: "Coming soon",
    accent: "Purple",
};

pub const FILES_PLACEHOLDER: Placeholder = Placeholder {
    heading: "File Intelligence",
    blurb: "Smart file organization with AI-powered search and tagging",
    footer: "Coming soon",
    accent: "Orange",
};

/// Fallback text for content that cannot be resolved.
pub const GENERIC_CONTENT: &str = "Widget content";

/// The body to render for a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentDescriptor {
    /// Task list bound to a user.
    TodoContent { user_id: String },
    /// Note browser bound to a user.
    NotesContent { user_id: String },
    /// Spinner while the user identity is still unknown.
    Loading { kind: WidgetKind },
    CalendarPlaceholder(Placeholder),
    FilesPlaceholder(Placeholder),
    /// Unrecognized widget type.
    Generic,
}

/// Map a widget to its body.
pub fn render(widget: &Widget, user: Option<&UserIdentity>) -> ContentDescriptor {
    render_kind(widget.kind, user)
}

/// Map a widget kind to its body.
pub fn render_kind(kind: WidgetKind, user: Option<&UserIdentity>) -> ContentDescriptor {
    match (kind, user) {
        (WidgetKind::Todo, Some(user)) => ContentDescriptor::TodoContent {
            user_id: user.id.clone(),
        },
        (WidgetKind::Notes, Some(user)) => ContentDescriptor::NotesContent {
            user_id: user.id.clone(),
        },
        (WidgetKind::Todo | WidgetKind::Notes, None) => ContentDescriptor::Loading { kind },
        (WidgetKind::Calendar, _) => ContentDescriptor::CalendarPlaceholder(CALENDAR_PLACEHOLDER),
        (WidgetKind::Files, _) => ContentDescriptor::FilesPlaceholder(FILES_PLACEHOLDER),
    }
}

/// Map a serialized type name to a body; unknown names get [`ContentDescriptor::Generic`].
pub fn render_type_name(type_name: &str, user: Option<&UserIdentity>) -> ContentDescriptor {
    match type_name.parse::<WidgetKind>() {
        Ok(kind) => render_kind(kind, user),
        Err(e) => {
            log::warn!("{}", e);
            ContentDescriptor::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetRegistry;

    fn user() -> UserIdentity {
        UserIdentity {
            id: "u-42".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_todo_and_notes_need_a_user() {
        let mut registry = WidgetRegistry::with_seed(1);
        let todo = registry.create_default(WidgetKind::Todo);
        let notes = registry.create_default(WidgetKind::Notes);

        assert_eq!(
            render(&todo, Some(&user())),
            ContentDescriptor::TodoContent { user_id: "u-42".to_string() }
        );
        assert_eq!(
            render(&notes, Some(&user())),
            ContentDescriptor::NotesContent { user_id: "u-42".to_string() }
        );
        assert_eq!(render(&todo, None), ContentDescriptor::Loading { kind: WidgetKind::Todo });
    }

    #[test]
    fn test_placeholders_ignore_user() {
        assert_eq!(
            render_kind(WidgetKind::Calendar, None),
            ContentDescriptor::CalendarPlaceholder(CALENDAR_PLACEHOLDER)
        );
        match render_kind(WidgetKind::Files, Some(&user())) {
            ContentDescriptor::FilesPlaceholder(p) => {
                assert_eq!(p.heading, "File Intelligence");
                assert_eq!(p.footer, "Coming soon");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_name_is_generic() {
        assert_eq!(render_type_name("weather", Some(&user())), ContentDescriptor::Generic);
        assert_eq!(
            render_type_name("calendar", None),
            ContentDescriptor::CalendarPlaceholder(CALENDAR_PLACEHOLDER)
        );
    }
}
