//! UI module for rendering the TUI

mod builder;
mod components;
mod fields;
mod layout;
mod preview;

use crate::app::App;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header);
    builder::draw(frame, areas.controls, app);
    preview::draw(frame, areas.preview, app);
    layout::draw_footer(frame, areas.footer);
    layout::draw_status_bar(frame, areas.status, app);

    // Modal error dialog on top of everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
