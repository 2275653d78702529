//! Field rendering utilities for forms

use crate::state::{ErrorSet, FieldName, FieldSet};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a field needs: bordered input plus one row per error line
pub fn field_height(errors: &ErrorSet, field: FieldName) -> u16 {
    3 + error_lines(errors.get(field)).len() as u16
}

fn error_lines(message: &str) -> Vec<&str> {
    if message.is_empty() {
        Vec::new()
    } else {
        message.lines().collect()
    }
}

/// Text shown inside the input box
pub fn display_value(value: &str, is_secret: bool) -> String {
    if is_secret {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

/// Draw one field: a bordered input, red when its error slot is set, with the
/// slot's message lines underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    fields: &FieldSet,
    errors: &ErrorSet,
    is_active: bool,
    mask: bool,
) {
    let has_error = errors.has_error(field);
    let border_color = match (has_error, is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let text_color = if is_active { Color::White } else { Color::Gray };

    let value = display_value(fields.get(field), mask && field.is_secret());
    let cursor = if is_active { "▌" } else { "" };

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let input = Paragraph::new(Line::from(vec![
        Span::styled(value, Style::default().fg(text_color)),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(block);
    frame.render_widget(input, input_area);

    let lines = error_lines(errors.get(field));
    if lines.is_empty() || area.height <= 3 {
        return;
    }

    let message_area = Rect {
        y: area.y + 3,
        height: area.height - 3,
        ..area
    };
    let message = Paragraph::new(
        lines
            .into_iter()
            .map(|l| Line::from(Span::styled(format!("  {l}"), Style::default().fg(Color::Red))))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(message, message_area);
}
