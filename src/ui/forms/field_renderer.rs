//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Border color for a control given its focus and validity
fn border_color(is_active: bool, is_invalid: bool) -> Color {
    if is_invalid {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw a control either inside a titled border or, when `compact`, on a
/// single row behind its title
fn render_control(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Line,
    color: Color,
    compact: bool,
) {
    if compact {
        let mut spans = vec![Span::styled(format!("{title}: "), Style::default().fg(color))];
        spans.extend(content.spans);
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        return;
    }

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw a single-line text input
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_invalid: bool,
    compact: bool,
) {
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(field.as_text().to_string(), text_style)];
    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    } else if let Some(placeholder) = field.kind.placeholder().filter(|_| field.as_text().is_empty()) {
        spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
    }

    render_control(
        frame,
        area,
        &field.title(),
        Line::from(spans),
        border_color(is_active, is_invalid),
        compact,
    );
}

/// Draw a single-choice selector showing the current option
pub fn draw_choice(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_active: bool,
    is_invalid: bool,
    compact: bool,
) {
    let line = if is_active {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(value.to_string())
    };

    render_control(
        frame,
        area,
        title,
        line,
        border_color(is_active, is_invalid),
        compact,
    );
}

/// Draw a checkbox with a wrapped label
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    is_invalid: bool,
) {
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = Style::default().fg(if is_invalid {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::Gray
    });

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(mark, style.add_modifier(Modifier::BOLD)),
        Span::styled(label.to_string(), style),
    ]))
    .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
