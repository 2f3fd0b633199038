//! Login form rendering

use super::field_renderer::{draw_error_text, draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::sink::CredentialSink;
use crate::state::FocusedControl;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the submit button
pub const SUBMIT_LABEL: &str = "Login";

/// Card size including its border
pub const CARD_WIDTH: u16 = 50;
pub const CARD_HEIGHT: u16 = 2 + 2 + 2 * (FIELD_HEIGHT + 1) + BUTTON_HEIGHT;

/// Draw the login card into `area`
pub fn draw_login<S: CredentialSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let view = app.form.view();
    let mask = app.config.mask_char();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(1),             // Spacer
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(1),             // Password error
            Constraint::Length(BUTTON_HEIGHT), // Login button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new(app.config.title())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_field(
        frame,
        chunks[2],
        view.email,
        mask,
        view.focus == FocusedControl::Email,
        view.email_error.is_some(),
    );
    draw_error_text(frame, chunks[3], view.email_error);

    draw_field(
        frame,
        chunks[4],
        view.password,
        mask,
        view.focus == FocusedControl::Password,
        view.password_error.is_some(),
    );
    draw_error_text(frame, chunks[5], view.password_error);

    render_button(
        frame,
        chunks[6],
        SUBMIT_LABEL,
        view.focus == FocusedControl::Submit,
    );
}
