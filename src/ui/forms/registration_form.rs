//! Registration form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the registration form with its submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(format!(" Registration → {} ", app.endpoint()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FieldName::ALL
        .into_iter()
        .map(|f| Constraint::Length(field_height(&form.errors, f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for field in FieldName::ALL {
        draw_field(
            frame,
            chunks[field.index()],
            field,
            &form.fields,
            &form.errors,
            form.active_field() == Some(field),
            app.state.mask_password,
        );
    }

    let button_area = Rect {
        width: chunks[FieldName::COUNT].width.min(20),
        ..chunks[FieldName::COUNT]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_row_active(),
        app.state.is_submitting(),
    );
}
