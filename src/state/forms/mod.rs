//! Form domain layer
//!
//! Field value objects, validation rules and the login form controller.

mod field;
mod form_state;
mod validation;

pub use field::FormField;
pub use form_state::{FocusedControl, Form, LoginForm, SubmitOutcome};
