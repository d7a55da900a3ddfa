//! UI module for rendering the landing page

mod components;
mod forms;
mod layout;
mod sections;
mod splash;

use crate::app::App;
use crate::state::{CourseDetails, View};
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match (&app.state.current_view, &app.splash_state) {
        (View::Splash, Some(splash_state)) => {
            splash::draw(frame, area, &app.state.details, splash_state);
        }
        _ => {
            let page = layout::create_layout(area);
            layout::draw_header(frame, page.header, app);
            sections::draw(frame, page.info, app);
            forms::draw(frame, page.form, app);
            layout::draw_status_bar(frame, page.status, app);
        }
    }

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

/// How far the information panel can scroll on a screen of `area`
pub fn info_scroll_limit(area: Rect, details: &CourseDetails) -> u16 {
    let page = layout::create_layout(area);
    sections::max_scroll(page.info, details)
}
