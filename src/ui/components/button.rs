//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a centered button with border.
/// `is_busy` dims the label and appends an ellipsis without disabling the button.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_selected: bool, is_busy: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if is_busy {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let content = if is_busy {
        format!(" {label}… ")
    } else {
        format!(" {label} ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(content)
        .style(text_style)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
