//! Form field value objects

use serde::{Deserialize, Serialize};

/// Input kind of a field, fixed at declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Telephone,
    Other,
}

impl FieldKind {
    /// Whether the kind carries a format constraint beyond "required"
    pub fn is_constrained(&self) -> bool {
        matches!(self, FieldKind::Email | FieldKind::Telephone)
    }
}

/// Represents a single form field with its declaration and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub is_multiline: bool,
    value: String,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a new multiline text field
    pub fn multiline(name: &str, label: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::new(name, label, FieldKind::Text)
        }
    }

    /// Create a new email field
    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    /// Create a new telephone field
    pub fn telephone(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Telephone)
    }

    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            is_multiline: false,
            value: String::new(),
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set an initial value
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// Current raw value, untrimmed
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value without surrounding whitespace or byte order marks
    pub fn trimmed_value(&self) -> &str {
        self.value
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.required {
            self.value.clone()
        } else if self.value.is_empty() {
            "(optional)".to_string()
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(FormField::text("a", "A").kind, FieldKind::Text);
        assert_eq!(FormField::email("a", "A").kind, FieldKind::Email);
        assert_eq!(FormField::telephone("a", "A").kind, FieldKind::Telephone);
        assert!(FormField::multiline("a", "A").is_multiline);
    }

    #[test]
    fn test_required_builder() {
        let field = FormField::text("name", "Name").required();
        assert!(field.required);
        assert!(!FormField::text("name", "Name").required);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("name", "Name");
        field.push_char('h');
        field.push_char('i');
        assert_eq!(field.value(), "hi");
        field.pop_char();
        assert_eq!(field.value(), "h");
    }

    #[test]
    fn test_newline_ignored_on_single_line_field() {
        let mut field = FormField::text("name", "Name");
        field.push_char('\n');
        assert_eq!(field.value(), "");

        let mut message = FormField::multiline("message", "Message");
        message.push_char('\n');
        assert_eq!(message.value(), "\n");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text("name", "Name");
        field.pop_char();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::email("email", "Email").with_value("a@b.co");
        field.clear();
        assert!(field.value().is_empty());
    }

    #[test]
    fn test_display_value_marks_empty_optional_field() {
        let phone = FormField::telephone("phone", "Phone");
        assert_eq!(phone.display_value(), "(optional)");
        let name = FormField::text("name", "Name").required();
        assert_eq!(name.display_value(), "");
    }

    #[test]
    fn test_trimmed_value_strips_whitespace_and_bom() {
        let field = FormField::text("name", "Name").with_value("\u{FEFF} Ada \n");
        assert_eq!(field.trimmed_value(), "Ada");
        assert_eq!(field.value(), "\u{FEFF} Ada \n");
    }

    #[test]
    fn test_constrained_kinds() {
        assert!(FieldKind::Email.is_constrained());
        assert!(FieldKind::Telephone.is_constrained());
        assert!(!FieldKind::Text.is_constrained());
        assert!(!FieldKind::Other.is_constrained());
    }
}
