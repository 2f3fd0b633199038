//! Layout components (centered card, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and the one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a `width` x `height` box inside `area`, shrinking it to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar: the transient message if any, otherwise key hints
pub fn draw_status_bar<S>(frame: &mut Frame, area: Rect, app: &App<S>) {
    if let Some(msg) = &app.status_message {
        let status = Paragraph::new(Line::from(Span::styled(
            format!(" {msg}"),
            Style::default().fg(Color::Green),
        )));
        frame.render_widget(status, area);
        return;
    }

    draw_help_text(
        frame,
        area,
        &[
            (" Tab", "next field"),
            ("Enter", "login"),
            (crate::platform::SUBMIT_SHORTCUT, "submit"),
            (crate::platform::PASTE_SHORTCUT, "paste"),
            ("Esc", "cancel"),
        ],
    );
}

/// Draw a row of `key: action` hints
fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
