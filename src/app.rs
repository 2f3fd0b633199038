//! Application state and core logic

use crate::config::TuiConfig;
use crate::sink::CredentialSink;
use crate::state::{FocusedControl, Form, LoginForm, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App<S> {
    /// Login form controller
    pub form: LoginForm<S>,
    /// User configuration
    pub config: TuiConfig,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
    /// Whether the user left without submitting
    cancelled: bool,
}

impl<S: CredentialSink> App<S> {
    /// Create a new App instance
    pub fn new(config: TuiConfig, sink: S) -> Self {
        Self {
            form: LoginForm::new(sink),
            config,
            status_message: None,
            quit: false,
            cancelled: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Check if the user dismissed the form without submitting
    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    fn cancel(&mut self) {
        tracing::info!("Login cancelled");
        self.cancelled = true;
        self.quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let focus = self.form.focus();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.cancel(),
            KeyCode::Esc => self.cancel(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_from_clipboard()
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter => match focus {
                FocusedControl::Email => self.form.set_focus(FocusedControl::Password),
                FocusedControl::Password | FocusedControl::Submit => self.submit(),
            },
            KeyCode::Char(' ') if focus == FocusedControl::Submit => self.submit(),
            // Other control chords are not text input
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {}
            KeyCode::Char(c) => self.form.input_char(c),
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a bracketed paste from the terminal
    pub fn handle_paste(&mut self, text: &str) {
        self.status_message = None;
        self.form.paste(text);
    }

    fn submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Submitted => {
                if self.config.exit_on_submit() {
                    self.quit = true;
                } else {
                    self.status_message = Some("Credentials accepted".to_string());
                }
            }
            SubmitOutcome::Rejected(err) => {
                tracing::debug!("Validation failed: {err}");
            }
        }
    }

    fn paste_from_clipboard(&mut self) {
        match read_clipboard() {
            Ok(text) => self.form.paste(&text),
            Err(err) => {
                tracing::warn!("Clipboard read failed: {err:?}");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
