//! Application state and core logic

use crate::config::CourseConfig;
use crate::state::{AppState, CourseDetails, FormFocus, RegistrationForm, SplashState, View};
use crate::submission::{self, FormEndpoint, HttpFormEndpoint};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where registrations are forwarded; `None` keeps them local
    endpoint: Option<Arc<dyn FormEndpoint>>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Poster splash animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance from the user configuration
    pub fn new(config: &CourseConfig) -> Result<Self> {
        let endpoint: Option<Arc<dyn FormEndpoint>> = match config.endpoint() {
            Some(url) => {
                let endpoint = HttpFormEndpoint::new(&url)?;
                tracing::info!(url = %endpoint.url(), "form endpoint configured");
                Some(Arc::new(endpoint))
            }
            None => {
                tracing::warn!("no form endpoint configured, registrations stay local");
                None
            }
        };

        let state = AppState::new(
            CourseDetails::from_config(config),
            RegistrationForm::new(config.show_participant_age()),
        );
        let mut app = Self::with_endpoint(state, endpoint);

        if config.show_splash() {
            app.state.current_view = View::Splash;
            app.splash_state = Some(SplashState::new());
        }
        Ok(app)
    }

    /// Create an App around existing state and endpoint
    pub fn with_endpoint(state: AppState, endpoint: Option<Arc<dyn FormEndpoint>>) -> Self {
        Self {
            state,
            endpoint,
            quit: false,
            copy_message: None,
            splash_state: None,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        match self.splash_state.as_mut() {
            Some(splash) => splash.update(terminal_height),
            None => return false,
        }
        self.finish_splash()
    }

    /// Skip the rest of the poster animation
    fn skip_splash(&mut self) {
        if let Some(splash) = self.splash_state.as_mut() {
            splash.skip();
        }
        self.finish_splash();
    }

    /// Show the page once the animation is over. Returns whether it was.
    fn finish_splash(&mut self) -> bool {
        let complete = self
            .splash_state
            .as_ref()
            .map_or(true, SplashState::is_complete);
        if complete {
            self.splash_state = None;
            self.state.current_view = View::Page;
        }
        complete
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.copy_message = None;

        match self.state.current_view {
            View::Splash => self.skip_splash(),
            View::Page => self.handle_page_key(key)?,
        }
        Ok(())
    }

    /// Handle keys on the landing page
    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        let focus = self.state.form.focus();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Down => self.state.scroll_down(),
            KeyCode::Up => self.state.scroll_up(),
            KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Char('s') if ctrl => {
                self.submit();
            }
            KeyCode::Char('u') if ctrl => self.state.form.clear_field(),
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                if let Err(err) = self.copy_share_link() {
                    self.push_error(format!("No se pudo copiar el enlace: {err}"));
                }
            }
            KeyCode::Left if focus == FormFocus::Role => self.state.form.select_prev_role(),
            KeyCode::Right if focus == FormFocus::Role => self.state.form.select_next_role(),
            KeyCode::Enter => match focus {
                FormFocus::Submit => {
                    self.submit();
                }
                FormFocus::Consent => self.state.form.toggle_consent(),
                _ => self.state.form.next_field(),
            },
            KeyCode::Char(c) if !ctrl => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Submit the registration form.
    ///
    /// The acknowledgment state is set before the POST is even started and
    /// is never revisited. Returns the delivery task when one was spawned.
    pub fn submit(&mut self) -> Option<JoinHandle<()>> {
        let payload = match self.state.form.submit() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!(%err, "submission blocked by the input surface");
                return None;
            }
        };

        match &self.endpoint {
            Some(endpoint) => Some(submission::dispatch(Arc::clone(endpoint), payload)),
            None => {
                tracing::info!(fields = ?payload.names(), "registration accepted without endpoint");
                None
            }
        }
    }

    /// Copy the pre-filled messaging link to the clipboard
    pub fn copy_share_link(&mut self) -> Result<()> {
        let link = self.state.details.whatsapp_link()?;
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(link.to_string())?;
        self.copy_message = Some("Enlace para compartir copiado".to_string());
        Ok(())
    }
}
