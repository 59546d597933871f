//! Field rendering utilities for forms

use crate::form::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border color for a field: focus wins, then the last validation verdict
fn border_color(is_active: bool, indicator: Option<bool>) -> Color {
    match (is_active, indicator) {
        (true, _) => Color::Cyan,
        (false, Some(true)) => Color::Green,
        (false, Some(false)) => Color::Red,
        (false, None) => Color::DarkGray,
    }
}

/// Caption under a field that failed validation
fn invalid_hint(field: &FormField) -> &'static str {
    if field.trimmed_value().is_empty() {
        " required "
    } else if field.kind.is_constrained() {
        " invalid format "
    } else {
        " invalid "
    }
}

/// Draw a form field with its validation indicator
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    indicator: Option<bool>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_str = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, indicator)));

    if indicator == Some(false) && !is_active {
        block = block.title_bottom(Line::from(Span::styled(
            invalid_hint(field),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
