//! Error dialog overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MAX_WIDTH: u16 = 60;

/// Render an error dialog centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let width = MAX_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(4).max(1) as usize;

    // title + blank + message + blank + hint, plus borders
    let message_rows = wrapped_rows(message, inner_width);
    let height = message_rows.saturating_add(6).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(message.lines().map(|l| Line::from(l.to_string())));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().bg(Color::Black));

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}

/// Rough row count of `text` once wrapped at `width` columns
fn wrapped_rows(text: &str, width: usize) -> u16 {
    let rows = text
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum::<usize>()
        .max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}
