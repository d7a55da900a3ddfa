//! Application state definitions

use super::content::CourseDetails;
use super::forms::RegistrationForm;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Course poster animation
    Splash,
    /// Landing page with the registration form
    #[default]
    Page,
}

/// State owned by one page instance
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub details: CourseDetails,
    pub form: RegistrationForm,

    /// Vertical scroll of the information panel
    pub info_scroll: u16,
    /// Furthest the information panel can scroll at the current size
    info_scroll_limit: u16,

    /// Non-fatal errors waiting to be shown, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(details: CourseDetails, form: RegistrationForm) -> Self {
        Self {
            details,
            form,
            ..Default::default()
        }
    }

    /// Record how far the panel can scroll, pulling the offset back in range
    pub fn set_info_scroll_limit(&mut self, limit: u16) {
        self.info_scroll_limit = limit;
        self.info_scroll = self.info_scroll.min(limit);
    }

    pub fn scroll_down(&mut self) {
        self.info_scroll = self.info_scroll.saturating_add(1).min(self.info_scroll_limit);
    }

    pub fn scroll_up(&mut self) {
        self.info_scroll = self.info_scroll.saturating_sub(1);
    }

    pub fn scroll_down_page(&mut self) {
        self.info_scroll = self.info_scroll.saturating_add(10).min(self.info_scroll_limit);
    }

    pub fn scroll_up_page(&mut self) {
        self.info_scroll = self.info_scroll.saturating_sub(10);
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "showing error to visitor");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently displayed
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
