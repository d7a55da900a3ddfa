//! Layout components (header, panels, status bar)

use crate::app::App;
use crate::platform::{SHARE_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the registration panel
const FORM_WIDTH: u16 = 52;

/// Areas of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub info: Rect,
    pub form: Rect,
    pub status: Rect,
}

/// Split the screen into header, information panel, form panel and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Panels
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(FORM_WIDTH)])
        .split(rows[1]);

    PageLayout {
        header: rows[0],
        info: panels[0],
        form: panels[1],
        status: rows[2],
    }
}

/// Draw the header with the course badge
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let details = &app.state.details;
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", details.badge),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(details.title, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            "  ·  Inscríbete gratis en el formulario",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar: feedback message or key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.copy_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(
            format!(" {}", key_hints()),
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn key_hints() -> String {
    format!(
        "Tab:campo  ←/→:perfil  Espacio:marcar  Enter/{SUBMIT_SHORTCUT}:enviar  \
         ↑/↓ PgUp/PgDn:información  {SHARE_SHORTCUT}:compartir  Esc:salir"
    )
}
