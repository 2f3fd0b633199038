//! Form field value objects

/// Represents a single text input with its identity and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Stable identifier (`"email"`, `"password"`)
    pub name: String,
    /// Visible label used to address the input
    pub label: String,
    pub value: String,
    /// Whether the value is obscured when displayed
    pub masked: bool,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            masked: false,
        }
    }

    /// Create a new field whose value is obscured on screen
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            masked: true,
            ..Self::text(name, label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Value with one more character appended
    pub fn with_char(&self, c: char) -> String {
        let mut value = self.value.clone();
        value.push(c);
        value
    }

    /// Value with the last character removed
    pub fn without_last_char(&self) -> String {
        let mut value = self.value.clone();
        value.pop();
        value
    }

    /// Get the display value for rendering, one `mask` per character for secret fields
    pub fn display_value(&self, mask: char) -> String {
        if self.masked {
            self.value.chars().map(|_| mask).collect()
        } else {
            self.value.clone()
        }
    }
}
