//! Layout components (header, status bar)

use crate::app::App;
use crate::pipeline::Severity;
use crate::platform::{MENU_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows taken by the header before the page scrolls
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the header once the page has scrolled past the threshold
pub const COMPACT_HEADER_HEIGHT: u16 = 1;
/// Rows reserved for the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

pub fn header_height(compact: bool) -> u16 {
    if compact {
        COMPACT_HEADER_HEIGHT
    } else {
        HEADER_HEIGHT
    }
}

/// The page view, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Page
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Split the header rows off the top of the page view
pub fn split_header(view: Rect, header_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_height), Constraint::Min(0)])
        .split(view);

    (chunks[0], chunks[1])
}

/// Draw the page header, compact once the page has scrolled
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    if app.header.is_scrolled() {
        let title = Paragraph::new(Line::from(Span::styled(
            " Contact ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(Color::Black));
        frame.render_widget(title, area);
        return;
    }

    let subtitle = if app.pipeline.is_submitting() {
        Span::styled("Sending...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "Leave us a message and we will get back to you.",
            Style::default().fg(Color::DarkGray),
        )
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Contact ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        subtitle,
    ]))
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(STATUS_BAR_HEIGHT),
        width: area.width,
        height: STATUS_BAR_HEIGHT,
    };

    let mut spans = vec![];

    // Submission state
    let state = if app.pipeline.is_submitting() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Green))
    };
    spans.push(state);

    let hints = format!("Tab:next  {SUBMIT_SHORTCUT}:send  {MENU_SHORTCUT}:jump  ^C:quit");
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Status message from the pipeline
    if let Some((text, severity)) = app.display.status() {
        let color = match severity {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(text, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_height() {
        assert_eq!(header_height(false), HEADER_HEIGHT);
        assert_eq!(header_height(true), COMPACT_HEADER_HEIGHT);
    }

    #[test]
    fn test_layout_reserves_status_bar() {
        let view = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(view, Rect::new(0, 0, 80, 23));
        let (header, rest) = split_header(view, HEADER_HEIGHT);
        assert_eq!(header.height, 3);
        assert_eq!(rest.y, 3);
    }
}
