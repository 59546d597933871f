//! Point-in-time copy of the form values handed to a submitter

use crate::form::ContactForm;
use chrono::{DateTime, Utc};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use uuid::Uuid;

/// Field values captured at submit time, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Identifies one submit attempt in logs
    pub id: Uuid,
    pub captured_at: DateTime<Utc>,
    entries: Vec<(String, String)>,
}

impl FormSnapshot {
    /// Copy every field value of the form
    pub fn capture(form: &ContactForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            captured_at: Utc::now(),
            entries: form
                .fields()
                .iter()
                .map(|f| (f.name.clone(), f.value().to_string()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct OrderedFields<'a>(&'a [(String, String)]);

impl Serialize for OrderedFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormSnapshot", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("captured_at", &self.captured_at)?;
        state.serialize_field("fields", &OrderedFields(&self.entries))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::standard();
        form.set_value("name", "Ada").unwrap();
        form.set_value("email", "ada@example.com").unwrap();
        form.set_value("message", "Hello").unwrap();
        form
    }

    #[test]
    fn test_capture_copies_values_in_order() {
        let snapshot = FormSnapshot::capture(&filled_form());
        let entries: Vec<_> = snapshot.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("phone", ""),
                ("message", "Hello"),
            ]
        );
        assert_eq!(snapshot.len(), 4);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_capture_is_detached_from_form() {
        let mut form = filled_form();
        let snapshot = FormSnapshot::capture(&form);
        form.set_value("name", "Grace").unwrap();
        assert_eq!(snapshot.get("name"), Some("Ada"));
        assert_eq!(snapshot.get("fax"), None);
    }

    #[test]
    fn test_each_capture_has_new_id() {
        let form = filled_form();
        assert_ne!(FormSnapshot::capture(&form).id, FormSnapshot::capture(&form).id);
    }

    #[test]
    fn test_serializes_fields_in_declaration_order() {
        let snapshot = FormSnapshot::capture(&filled_form());
        let json = serde_json::to_string(&snapshot).unwrap();
        let name_at = json.find("\"name\"").unwrap();
        let email_at = json.find("\"email\"").unwrap();
        let message_at = json.find("\"message\"").unwrap();
        assert!(name_at < email_at && email_at < message_at);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fields"]["email"], "ada@example.com");
        assert_eq!(value["id"], snapshot.id.to_string());
    }
}
