//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `login_form`: The email/password login card

mod field_renderer;
mod login_form;

pub use login_form::{draw_login, CARD_HEIGHT, CARD_WIDTH};
