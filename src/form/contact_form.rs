//! Contact form declaration and editing state

use super::field::FormField;
use thiserror::Error;

/// Errors raised while declaring or addressing a form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),
    #[error("form has no field named `{0}`")]
    UnknownField(String),
    #[error("a form needs at least one field")]
    Empty,
}

/// Trait for common form operations
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
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Ordered set of uniquely named fields plus a focus cursor.
///
/// The focus cursor spans every field and one trailing slot for the
/// send button, the same way the create forms keep a buttons row.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new(fields: Vec<FormField>) -> Result<Self, FormError> {
        if fields.is_empty() {
            return Err(FormError::Empty);
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self {
            fields,
            active_field_index: 0,
        })
    }

    /// The site's contact form: name, email, phone and message
    pub fn standard() -> Self {
        Self {
            fields: vec![
                FormField::text("name", "Name").required(),
                FormField::email("email", "Email").required(),
                FormField::telephone("phone", "Phone"),
                FormField::multiline("message", "Message").required(),
            ],
            active_field_index: 0,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Replace the value of a named field
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = self
            .field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.set_value(value.to_string());
        Ok(())
    }

    /// Clear every field value and move focus back to the first field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }

    /// Returns true if the send button is currently focused
    pub fn is_button_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Whether the focused field accepts newlines
    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Name of the focused field, if focus is on a field
    pub fn active_field_name(&self) -> Option<&str> {
        self.get_field(self.active_field_index)
            .map(|f| f.name.as_str())
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::standard()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields, send button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldKind;

    mod declaration {
        use super::*;

        #[test]
        fn test_standard_form_fields() {
            let form = ContactForm::standard();
            let names: Vec<_> = form.fields().iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["name", "email", "phone", "message"]);
            assert_eq!(form.field("email").map(|f| f.kind), Some(FieldKind::Email));
            assert_eq!(form.field("phone").map(|f| f.required), Some(false));
            assert!(form.field("message").is_some_and(|f| f.is_multiline));
        }

        #[test]
        fn test_duplicate_field_rejected() {
            let result = ContactForm::new(vec![
                FormField::text("name", "Name"),
                FormField::email("name", "Email"),
            ]);
            assert_eq!(
                result.unwrap_err(),
                FormError::DuplicateField("name".to_string())
            );
        }

        #[test]
        fn test_empty_form_rejected() {
            assert_eq!(ContactForm::new(vec![]).unwrap_err(), FormError::Empty);
        }

        #[test]
        fn test_set_value_unknown_field() {
            let mut form = ContactForm::standard();
            assert_eq!(
                form.set_value("fax", "123"),
                Err(FormError::UnknownField("fax".to_string()))
            );
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_next_field_wraps_through_button() {
            let mut form = ContactForm::standard();
            for _ in 0..4 {
                form.next_field();
            }
            assert!(form.is_button_active());
            assert!(form.get_active_field_mut().is_none());
            form.next_field();
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_prev_field_wraps_to_button() {
            let mut form = ContactForm::standard();
            form.prev_field();
            assert!(form.is_button_active());
            form.prev_field();
            assert_eq!(form.active_field_name(), Some("message"));
            assert!(form.is_active_field_multiline());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::standard();
            form.set_active_field(99);
            assert_eq!(form.active_field(), 4);
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn test_reset_clears_values_and_focus() {
            let mut form = ContactForm::standard();
            form.set_value("name", "Ada").unwrap();
            form.set_value("email", "ada@example.com").unwrap();
            form.set_active_field(2);

            form.reset();

            assert!(form.fields().iter().all(|f| f.value().is_empty()));
            assert_eq!(form.active_field(), 0);
        }
    }
}
