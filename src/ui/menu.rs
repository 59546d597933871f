//! Field jump menu overlay

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the jump menu in the top-right corner of `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let fields = app.form().fields();

    let mut lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Cyan)),
                Span::raw(field.label.clone()),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        " Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let width = 24.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let menu_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height,
    };

    let block = Block::default()
        .title(" Jump to ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, menu_area);
    frame.render_widget(Paragraph::new(lines).block(block), menu_area);
}
