//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar, returning the content area
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission indicator
    let indicator = if app.state.is_submitting() {
        Span::styled(" ◐ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        format!("Tab/↑↓:move  Enter:next/submit  {SUBMIT_SHORTCUT}:submit  Esc:quit"),
        Style::default().fg(Color::Gray),
    ));

    let invalid = app.state.form.errors.fields_with_errors().count();
    if invalid > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            error_summary(invalid),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

fn error_summary(count: usize) -> String {
    match count {
        1 => "1 field needs attention".to_string(),
        n if n == FieldName::COUNT => "all fields need attention".to_string(),
        n => format!("{n} fields need attention"),
    }
}
