//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a single-line field (borders + content)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a single-line input. Secret fields are shown as `mask` characters.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    mask: char,
    is_active: bool,
    has_error: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let display_value = field.display_value(mask);
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    // Keep the tail visible once the value outgrows the box
    let inner_width = area.width.saturating_sub(3) as usize;
    let visible: String = {
        let count = display_str.chars().count();
        display_str
            .chars()
            .skip(count.saturating_sub(inner_width))
            .collect()
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(visible, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the helper line under a field, blank when there is no error
pub fn draw_error_text(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let text = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(text, area);
    }
}
