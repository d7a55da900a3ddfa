//! Course poster splash

use crate::state::{CourseDetails, SplashState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const POSTER_WIDTH: u16 = 50;

/// Poster text
fn poster_lines(details: &CourseDetails) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let accent = Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD);
    let teal = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    vec![
        Line::from(Span::styled("CURSO PARA", bold)),
        Line::from(vec![
            Span::styled("PADRES Y ", bold),
            Span::styled("EDUCADORES", accent),
        ]),
        Line::from(Span::styled("GRATUITO", teal)),
        Line::from(""),
        Line::from("Impartido por"),
        Line::from(Span::styled(details.instructor, bold)),
        Line::from(""),
        Line::from(vec![Span::styled("Cuándo   ", teal), Span::raw(details.day)]),
        Line::from(vec![
            Span::styled("Horario  ", teal),
            Span::raw(details.schedule),
        ]),
        Line::from(vec![Span::styled("Lugar    ", teal), Span::raw(details.venue)]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Inscripciones en el Centro Cívico · Más información {} (solo mañanas)",
                details.phone_display
            ),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// Draw the poster, offset downwards while it rises into place
pub fn draw(frame: &mut Frame, area: Rect, details: &CourseDetails, splash: &SplashState) {
    let lines = poster_lines(details);
    // Lines plus borders; the last line wraps once
    let height = (lines.len() as u16 + 3).min(area.height);
    let width = POSTER_WIDTH.min(area.width);

    let resting_y = area.y + area.height.saturating_sub(height) / 2;
    let offset = splash.rise_offset.round() as u16;
    let y = resting_y
        .saturating_add(offset)
        .min(area.y + area.height.saturating_sub(height));

    let poster_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y,
        width,
        height,
    };

    frame.render_widget(Clear, poster_area);
    let poster = Paragraph::new(lines)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(poster, poster_area);

    let hint = "Pulsa cualquier tecla para continuar";
    if area.height > 0 {
        let hint_area = Rect {
            x: area.x + area.width.saturating_sub(hint.chars().count() as u16) / 2,
            y: area.y + area.height - 1,
            width: (hint.chars().count() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}
