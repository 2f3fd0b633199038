//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::sink::CredentialSink;
use ratatui::Frame;

/// Main draw function
pub fn draw<S: CredentialSink>(frame: &mut Frame, app: &App<S>) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    let card = layout::centered_rect(forms::CARD_WIDTH, forms::CARD_HEIGHT, main_area);
    forms::draw_login(frame, card, app);

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::sink::CollectingSink;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(app: &App<CollectingSink>) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn new_app() -> App<CollectingSink> {
        App::new(TuiConfig::default(), CollectingSink::new())
    }

    #[test]
    fn test_renders_labels_title_and_button() {
        let screen = render(&new_app());
        assert!(screen.contains("Welcome Back!"));
        assert!(screen.contains(" Email "));
        assert!(screen.contains(" Password "));
        assert!(screen.contains("Login"));
    }

    #[test]
    fn test_fresh_form_shows_cursor_in_email_only() {
        let screen = render(&new_app());
        let email_row = screen
            .lines()
            .skip_while(|line| !line.contains(" Email "))
            .nth(1)
            .unwrap();
        assert!(email_row.contains('▌'));
        assert_eq!(screen.matches('▌').count(), 1);
        assert!(screen.contains("(empty)"));
    }

    #[test]
    fn test_no_error_text_initially() {
        let screen = render(&new_app());
        assert!(!screen.contains("Invalid email format"));
        assert!(!screen.contains("Password must be at least 6 characters long"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = new_app();
        app.form.update_email("test@example.com".to_string());
        app.form.update_password("hunter22".to_string());

        let screen = render(&app);
        assert!(screen.contains("test@example.com"));
        assert!(!screen.contains("hunter22"));
        assert!(screen.contains("••••••••"));
    }

    #[test]
    fn test_custom_mask_and_title() {
        let config = TuiConfig {
            title: Some("Sign in to Acme".to_string()),
            mask_char: Some('*'),
            ..Default::default()
        };
        let mut app = App::new(config, CollectingSink::new());
        app.form.update_password("abc".to_string());

        let screen = render(&app);
        assert!(screen.contains("Sign in to Acme"));
        assert!(screen.contains("***"));
    }

    #[test]
    fn test_invalid_email_message_shown() {
        let mut app = new_app();
        app.form.update_email("invalidemail.com".to_string());
        app.form.submit();

        let screen = render(&app);
        assert!(screen.contains("Invalid email format"));
        assert!(!screen.contains("Password must be at least 6 characters long"));
    }

    #[test]
    fn test_short_password_message_shown() {
        let mut app = new_app();
        app.form.update_email("test@example.com".to_string());
        app.form.update_password("pass".to_string());
        app.form.submit();

        let screen = render(&app);
        assert!(screen.contains("Password must be at least 6 characters long"));
        assert!(!screen.contains("Invalid email format"));
    }

    #[test]
    fn test_error_message_disappears_after_edit() {
        let mut app = new_app();
        app.form.submit();
        app.form.update_email("t".to_string());

        let screen = render(&app);
        assert!(!screen.contains("Invalid email format"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut app = new_app();
        let screen = render(&app);
        assert!(screen.contains("next field"));

        app.status_message = Some("Credentials accepted".to_string());
        let screen = render(&app);
        assert!(screen.contains("Credentials accepted"));
        assert!(!screen.contains("next field"));
    }

    #[test]
    fn test_renders_in_tiny_terminal() {
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = new_app();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
