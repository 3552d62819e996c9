//! The mounted dashboard: a signed-in user, their canvas and the sidebar.

use crate::auth::UserIdentity;
use crate::canvas::Canvas;
use crate::config::DashboardConfig;
use crate::content::{self, ContentDescriptor};
use crate::widget::{WidgetId, WidgetKind};

/// Avatar letter used when the email is empty.
const FALLBACK_INITIAL: char = 'U';

#[derive(Debug)]
pub struct Dashboard {
    user: UserIdentity,
    canvas: Canvas,
    sidebar_open: bool,
}

impl Dashboard {
    /// Mount a dashboard for `user`. Layout starts fresh on every mount.
    pub fn mount(user: UserIdentity, config: &DashboardConfig) -> Self {
        log::info!("Mounting dashboard for {}", user.email);
        Self {
            user,
            canvas: config.build_canvas(),
            sidebar_open: false,
        }
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    /// First letter of the email, uppercased, for the avatar.
    pub fn user_initial(&self) -> char {
        self.user
            .email
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or(FALLBACK_INITIAL)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Add a widget picked from the sidebar. The sidebar stays open.
    pub fn add_widget(&mut self, kind: WidgetKind) -> WidgetId {
        self.canvas.add(kind)
    }

    /// Body for the widget with `id`.
    pub fn content(&self, id: &WidgetId) -> Option<ContentDescriptor> {
        self.canvas.get(id).map(|w| content::render(w, Some(&self.user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> UserIdentity {
        UserIdentity {
            id: "u1".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_mount_seeds_layout_with_sidebar_closed() {
        let dashboard = Dashboard::mount(user("ada@example.com"), &DashboardConfig::default());
        assert_eq!(dashboard.canvas().len(), 4);
        assert!(!dashboard.is_sidebar_open());
        assert_eq!(dashboard.user_initial(), 'A');
    }

    #[test]
    fn test_sidebar_add_and_content() {
        let mut dashboard = Dashboard::mount(user(""), &DashboardConfig::default());
        dashboard.toggle_sidebar();
        let id = dashboard.add_widget(WidgetKind::Notes);

        assert!(dashboard.is_sidebar_open());
        assert_eq!(
            dashboard.content(&id),
            Some(ContentDescriptor::NotesContent { user_id: "u1".to_string() })
        );
        assert_eq!(dashboard.user_initial(), 'U');
        assert_eq!(dashboard.content(&WidgetId::from("gone")), None);
    }
}
