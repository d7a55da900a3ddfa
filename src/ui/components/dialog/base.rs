//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Used for both the title and the border
    pub color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint shown under the message
    pub hint: Vec<Span<'a>>,
    pub max_width: u16,
}

/// Render a dialog overlay centered on the screen
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let screen = frame.area();
    let width = config.max_width.min(screen.width);
    // Borders plus one column of padding on each side
    let text_width = width.saturating_sub(4).max(1) as usize;

    let message_rows: usize = config
        .message
        .split('\n')
        .map(|line| line.chars().count().div_ceil(text_width).max(1))
        .sum();
    // title + blank + message + blank + hint + borders
    let height = (message_rows as u16 + 6).min(screen.height);

    let area = centered(screen, width, height);
    frame.render_widget(Clear, area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(config.message.split('\n').map(Line::from));
    content.push(Line::from(""));
    content.push(Line::from(config.hint));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, area);
}

/// Rectangle of the given size centered in `outer`
fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: outer.x + outer.width.saturating_sub(width) / 2,
        y: outer.y + outer.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let outer = Rect::new(0, 0, 80, 24);
        let rect = centered(outer, 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_larger_than_outer() {
        let outer = Rect::new(0, 0, 10, 5);
        let rect = centered(outer, 40, 10);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
    }
}
