//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod menu;
mod terminal_display;

pub use forms::item_rows;
pub use layout::{header_height, STATUS_BAR_HEIGHT};
pub use terminal_display::TerminalDisplay;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let view = layout::create_layout(area);

    // The header sits on top of the scrolled form
    forms::draw_contact_form(frame, view, app);
    let (header_area, below_header) = layout::split_header(view, app.header_height());
    layout::draw_header(frame, header_area, app);

    if app.menu.is_open() {
        menu::draw(frame, below_header, app);
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
