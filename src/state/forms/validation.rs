//! Credential format rules

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 6;

/// Non-empty local part, `@`, a domain containing a `.`, no whitespace anywhere.
///
/// Whitespace is a fixed set: tab, line breaks, space, NBSP, the Unicode space
/// separators and U+FEFF. Unlike Unicode White_Space it excludes U+0085.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const WS: &str = r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";
    Regex::new(&format!(r"^[^{WS}@]+@[^{WS}@]+\.[^{WS}@]+$")).expect("valid email regex")
});

/// Reasons a submit attempt is rejected.
///
/// The `Display` text is the message shown under the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Check an email address against the accepted format
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmailFormat)
    }
}

/// Check a password against the minimum length, measured in UTF-16 code units
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.encode_utf16().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooShort)
    }
}

/// Validate both fields, email first. Only the first failure is reported.
pub fn validate(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_password(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_emails() {
        for email in [
            "test@example.com",
            "a@b.c",
            "first.last@sub.domain.org",
            "user+tag@example.co.uk",
            "a@b.c.d",
            "a\u{85}b@c.de",
        ] {
            assert_eq!(validate_email(email), Ok(()), "{email} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_emails() {
        for email in [
            "",
            "invalidemail.com",
            "@example.com",
            "test@",
            "test@example",
            "test@.",
            "test@example.",
            "test@@example.com",
            "te st@example.com",
            "test@exa mple.com",
            " test@example.com",
            "test@example.com ",
            "test@example.com\n",
            "test\t@example.com",
            "a\u{feff}b@c.de",
            "a@c.d\u{a0}e",
            "a\u{3000}b@c.de",
            "a\u{2028}b@c.de",
        ] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::InvalidEmailFormat),
                "{email:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_password_length_boundary() {
        assert_eq!(validate_password(""), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            validate_password("12345"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_password("123456"), Ok(()));
        assert_eq!(validate_password("password123"), Ok(()));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Basic-plane characters are one unit each
        assert_eq!(
            validate_password("ééééé"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_password("éééééé"), Ok(()));
        // Astral-plane characters are two units each
        assert_eq!(validate_password("😀😀😀"), Ok(()));
        assert_eq!(
            validate_password("😀😀"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_password_whitespace_counts() {
        assert_eq!(validate_password("      "), Ok(()));
    }

    #[test]
    fn test_validate_reports_email_before_password() {
        assert_eq!(
            validate("invalidemail.com", "pass"),
            Err(ValidationError::InvalidEmailFormat)
        );
        assert_eq!(
            validate("test@example.com", "pass"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate("test@example.com", "password123"), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidEmailFormat.to_string(),
            "Invalid email format"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
    }
}
