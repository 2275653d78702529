//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    forms::draw_registration(frame, main_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog goes on top of everything else
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
