//! Registration form rendering

use super::field_renderer::{draw_checkbox, draw_choice, draw_field};
use crate::app::App;
use crate::state::{FormFocus, RegistrationForm, ValidationError};
use crate::ui::components::{render_button, render_inline_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const ACKNOWLEDGMENT: &str = "✔ ¡Gracias! Tu mensaje ha sido enviado.";
const CONSENT_LABEL: &str = "Acepto ser contactada/o para confirmar mi inscripción. *";
const ROLE_TITLE: &str = "Soy… *";

const INTRO_HEIGHT: u16 = 2;
const MESSAGES_HEIGHT: u16 = 3;
const SUBMIT_LABEL: &str = "Enviar inscripción";

/// Rows taken by each control in the bordered layout
fn control_height(focus: FormFocus) -> u16 {
    match focus {
        FormFocus::Consent => 2,
        FormFocus::Submit => BUTTON_HEIGHT,
        _ => 3,
    }
}

/// Rows the bordered layout needs for `order`
fn full_height(order: &[FormFocus]) -> u16 {
    INTRO_HEIGHT + order.iter().map(|f| control_height(*f)).sum::<u16>() + MESSAGES_HEIGHT
}

/// Draw the registration panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Reserva tu plaza ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let order = form.focus_order();
    // Short terminals get one row per control and no intro
    let compact = inner.height < full_height(&order);

    let mut constraints = vec![Constraint::Length(if compact { 0 } else { INTRO_HEIGHT })];
    constraints.extend(order.iter().map(|f| {
        Constraint::Length(if compact { 1 } else { control_height(*f) })
    }));
    constraints.push(Constraint::Length(MESSAGES_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    if !compact {
        let intro = Paragraph::new(Span::styled(
            "El curso es gratuito. También puedes inscribirte presencialmente en el Centro Cívico.",
            Style::default().fg(Color::DarkGray),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(intro, chunks[0]);
    }

    let invalid_focus = form.invalid().map(ValidationError::focus);
    for (slot, control) in order.iter().enumerate() {
        let area = chunks[slot + 1];
        let is_active = form.focus() == *control;
        let is_invalid = invalid_focus == Some(*control);
        draw_control(frame, area, form, *control, is_active, is_invalid, compact);
    }

    draw_messages(frame, chunks[order.len() + 1], form);
}

fn draw_control(
    frame: &mut Frame,
    area: Rect,
    form: &RegistrationForm,
    control: FormFocus,
    is_active: bool,
    is_invalid: bool,
    compact: bool,
) {
    match control {
        FormFocus::Name => draw_field(frame, area, &form.name, is_active, is_invalid, compact),
        FormFocus::Email => draw_field(frame, area, &form.email, is_active, is_invalid, compact),
        FormFocus::Phone => draw_field(frame, area, &form.phone, is_active, is_invalid, compact),
        FormFocus::Attendance => {
            draw_field(frame, area, &form.attendance, is_active, is_invalid, compact)
        }
        FormFocus::ParticipantAge => {
            if let Some(field) = &form.participant_age {
                draw_field(frame, area, field, is_active, is_invalid, compact);
            }
        }
        FormFocus::Conditional => {
            if let Some(field) = form.conditional() {
                draw_field(frame, area, field, is_active, is_invalid, compact);
            }
        }
        FormFocus::Role => draw_choice(
            frame,
            area,
            ROLE_TITLE,
            form.role().label(),
            is_active,
            is_invalid,
            compact,
        ),
        FormFocus::Consent => draw_checkbox(
            frame,
            area,
            CONSENT_LABEL,
            form.consent,
            is_active,
            is_invalid,
        ),
        FormFocus::Submit if compact => {
            render_inline_button(frame, area, SUBMIT_LABEL, is_active, Color::Green)
        }
        FormFocus::Submit => render_button(frame, area, SUBMIT_LABEL, is_active, Color::Green),
    }
}

/// Acknowledgment and inline validation message
fn draw_messages(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let mut lines = Vec::new();
    if form.is_submitted() {
        lines.push(Line::from(Span::styled(
            ACKNOWLEDGMENT,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(err) = form.invalid() {
        lines.push(Line::from(Span::styled(
            format!("⚠ {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
