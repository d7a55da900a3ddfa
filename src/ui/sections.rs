//! Informational sections of the landing page

use crate::app::App;
use crate::state::CourseDetails;
use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What / who / price bullets
const BULLETS: &[(&str, &str)] = &[
    (
        "Qué es",
        "Sesiones dinámicas con ideas prácticas para el día a día en casa y en el aula.",
    ),
    (
        "Para quién",
        "Padres, madres, cuidadores y educadores de cualquier etapa educativa.",
    ),
    (
        "Precio",
        "100% gratuito, plazas limitadas por orden de inscripción.",
    ),
];

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn label_value(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

/// All lines of the information panel, top to bottom
pub fn page_lines(details: &CourseDetails, year: i32) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Curso ", bold),
            Span::styled(
                "GRATUITO",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" para Padres y Educadores", bold),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Un espacio práctico para compartir herramientas y experiencias. Impartido por "),
            Span::styled(details.instructor, bold),
            Span::raw(", experta en temas educativos."),
        ]),
        Line::from(""),
        label_value("Cuándo", details.day.to_string()),
        label_value("Horario", details.schedule.to_string()),
        label_value("Lugar", details.venue.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Inscripciones en el Centro Cívico. Más información por teléfono (solo mañanas).",
            muted,
        )),
        Line::from(""),
        heading("Información"),
    ];

    for (title, text) in BULLETS {
        lines.push(Line::from(Span::styled(format!("  {title}"), bold)));
        lines.push(Line::from(format!("  {text}")));
    }

    lines.push(Line::from(""));
    lines.push(heading("Impartido por"));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  [{}] ", details.instructor_initials),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(details.instructor, bold),
    ]));
    lines.push(Line::from(format!("  {}", details.instructor_bio)));

    lines.push(Line::from(""));
    lines.push(heading("Ubicación"));
    lines.push(Line::from(format!("  {} · {}", details.venue, details.city)));
    let map = details
        .map_embed_url()
        .map(|url| url.to_string())
        .unwrap_or_else(|_| details.map_query.to_string());
    lines.push(label_value("Mapa", map));

    lines.push(Line::from(""));
    lines.push(heading("Contacto"));
    lines.push(label_value(
        "Teléfono",
        format!("{} ({})", details.phone_display, details.tel_link()),
    ));
    if let Ok(link) = details.whatsapp_link() {
        lines.push(label_value("WhatsApp", link.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("© {year} {}", details.title),
        muted,
    )));
    lines
}

/// Rows a line of text takes once word-wrapped to `width` columns
fn wrapped_rows(text: &str, width: usize) -> usize {
    let width = width.max(1);
    let mut rows = 1;
    let mut column = 0;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if column == 0 { len } else { column + 1 + len };
        if needed <= width {
            column = needed;
            continue;
        }
        if column > 0 {
            rows += 1;
        }
        // Words wider than the panel are broken across rows
        rows += len.saturating_sub(1) / width;
        column = len - len.saturating_sub(1) / width * width;
    }
    rows
}

fn panel_block() -> Block<'static> {
    Block::default()
        .title(" Información ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Furthest the panel in `area` can scroll before running out of content
pub fn max_scroll(area: Rect, details: &CourseDetails) -> u16 {
    let inner = panel_block().inner(area);
    let year = chrono::Local::now().year();
    let rows: usize = page_lines(details, year)
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            wrapped_rows(&text, usize::from(inner.width))
        })
        .sum();
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}

/// Draw the scrollable information panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let year = chrono::Local::now().year();
    let paragraph = Paragraph::new(page_lines(&app.state.details, year))
        .wrap(Wrap { trim: false })
        .scroll((app.state.info_scroll, 0))
        .block(panel_block());
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_contains_schedule_and_venue() {
        let text = plain(&page_lines(&CourseDetails::default(), 2026));
        assert!(text.contains(&"  Cuándo: Todos los martes".to_string()));
        assert!(text.contains(&"  Horario: 12:30 – 13:45".to_string()));
        assert!(text.contains(&"  Lugar: Centro Cívico de Parquesol".to_string()));
    }

    #[test]
    fn test_contains_contact_links() {
        let text = plain(&page_lines(&CourseDetails::default(), 2026)).join("\n");
        assert!(text.contains("657 683 223 (tel:+34657683223)"));
        assert!(text.contains("https://wa.me/34657683223?text="));
        assert!(text.contains("https://www.google.com/maps?q="));
    }

    #[test]
    fn test_footer_uses_year() {
        let lines = plain(&page_lines(&CourseDetails::default(), 2031));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("© 2031 Curso para Padres y Educadores")
        );
    }

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("uno dos", 10), 1);
        assert_eq!(wrapped_rows("uno dos tres", 10), 2);
        assert_eq!(wrapped_rows("abcdefghijklmnopqrstuvwxy", 10), 3);
        assert_eq!(wrapped_rows("ab abcdefghijklmnopqrstuvwxy", 10), 4);
    }

    #[test]
    fn test_no_scroll_when_everything_fits() {
        let area = Rect::new(0, 0, 200, 200);
        assert_eq!(max_scroll(area, &CourseDetails::default()), 0);
    }

    #[test]
    fn test_narrow_panel_scrolls_further() {
        let details = CourseDetails::default();
        let wide = max_scroll(Rect::new(0, 0, 100, 20), &details);
        let narrow = max_scroll(Rect::new(0, 0, 30, 20), &details);
        assert!(wide > 0);
        assert!(narrow > wide);
    }

    #[test]
    fn test_all_bullets_present() {
        let text = plain(&page_lines(&CourseDetails::default(), 2026));
        for (title, _) in BULLETS {
            assert!(text.contains(&format!("  {title}")));
        }
    }
}
