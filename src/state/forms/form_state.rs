//! Login form state and the controller that owns it

use super::field::FormField;
use super::validation::{validate, ValidationError};
use crate::sink::CredentialSink;

/// Trait for common focus navigation over a form's controls
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Field values and the error flag for each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub email: FormField,
    pub password: FormField,
    pub email_error: bool,
    pub password_error: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            email_error: false,
            password_error: false,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedControl {
    #[default]
    Email,
    Password,
    Submit,
}

impl FocusedControl {
    fn index(self) -> usize {
        match self {
            FocusedControl::Email => 0,
            FocusedControl::Password => 1,
            FocusedControl::Submit => 2,
        }
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => FocusedControl::Email,
            1 => FocusedControl::Password,
            _ => FocusedControl::Submit,
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Credentials went to the sink and the form was reset
    Submitted,
    /// Validation failed; the matching error flag is now set
    Rejected(ValidationError),
}

/// Everything a presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub email: &'a FormField,
    pub password: &'a FormField,
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub focus: FocusedControl,
}

/// Owns the login form state and the sink that receives accepted credentials.
///
/// Validation is deferred to [`LoginForm::submit`]; edits never validate, they
/// only clear the edited field's error flag.
#[derive(Debug)]
pub struct LoginForm<S> {
    state: FormState,
    focus: FocusedControl,
    sink: S,
}

impl<S: CredentialSink> LoginForm<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: FormState::new(),
            focus: FocusedControl::default(),
            sink,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn focus(&self) -> FocusedControl {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FocusedControl) {
        self.focus = focus;
    }

    /// Set the email value and clear its error flag
    pub fn update_email(&mut self, value: String) {
        self.state.email.set_text(value);
        self.state.email_error = false;
    }

    /// Set the password value and clear its error flag
    pub fn update_password(&mut self, value: String) {
        self.state.password.set_text(value);
        self.state.password_error = false;
    }

    /// Validate the fields and hand them to the sink if both pass.
    ///
    /// Email is checked first; when it fails the password is not looked at.
    /// A rejected attempt leaves the field values untouched.
    pub fn submit(&mut self) -> SubmitOutcome {
        if let Err(err) = validate(self.state.email.as_text(), self.state.password.as_text()) {
            match err {
                ValidationError::InvalidEmailFormat => self.state.email_error = true,
                ValidationError::PasswordTooShort => self.state.password_error = true,
            }
            tracing::debug!(error = ?err, "Submit rejected");
            return SubmitOutcome::Rejected(err);
        }

        let email = std::mem::take(&mut self.state.email.value);
        let password = std::mem::take(&mut self.state.password.value);
        self.sink.deliver(email, password);

        self.state = FormState::new();
        self.focus = FocusedControl::Email;
        tracing::info!("Credentials submitted");
        SubmitOutcome::Submitted
    }

    /// Append a typed character to the focused input
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FocusedControl::Email => self.update_email(self.state.email.with_char(c)),
            FocusedControl::Password => self.update_password(self.state.password.with_char(c)),
            FocusedControl::Submit => {}
        }
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        match self.focus {
            FocusedControl::Email => self.update_email(self.state.email.without_last_char()),
            FocusedControl::Password => {
                self.update_password(self.state.password.without_last_char())
            }
            FocusedControl::Submit => {}
        }
    }

    /// Insert pasted text into the focused input. Line breaks are dropped.
    pub fn paste(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        if text.is_empty() {
            return;
        }
        match self.focus {
            FocusedControl::Email => {
                let value = format!("{}{}", self.state.email.as_text(), text);
                self.update_email(value);
            }
            FocusedControl::Password => {
                let value = format!("{}{}", self.state.password.as_text(), text);
                self.update_password(value);
            }
            FocusedControl::Submit => {}
        }
    }

    /// Render-ready snapshot
    pub fn view(&self) -> FormView<'_> {
        FormView {
            email: &self.state.email,
            password: &self.state.password,
            email_error: self
                .state
                .email_error
                .then_some(error_message(ValidationError::InvalidEmailFormat)),
            password_error: self
                .state
                .password_error
                .then_some(error_message(ValidationError::PasswordTooShort)),
            focus: self.focus,
        }
    }
}

impl<S: CredentialSink> Form for LoginForm<S> {
    fn field_count(&self) -> usize {
        3 // email, password, submit button
    }
    fn active_field(&self) -> usize {
        self.focus.index()
    }
    fn set_active_field(&mut self, index: usize) {
        self.focus = FocusedControl::from_index(index.min(2));
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.state.email),
            1 => Some(&self.state.password),
            // Index 2 is the submit button, no FormField for it
            _ => None,
        }
    }
}

fn error_message(err: ValidationError) -> &'static str {
    match err {
        ValidationError::InvalidEmailFormat => "Invalid email format",
        ValidationError::PasswordTooShort => "Password must be at least 6 characters long",
    }
}
