//! Host-supplied feedback: the page banner and per-field errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity of a banner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Success,
    Warning,
    Error,
    Info,
}

impl MessageType {
    /// Returns the lowercase name used for styling hooks.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A banner message shown above the page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub summary: String,
}

/// Validation errors keyed by form field name.
///
/// Field order is irrelevant; group queries take the field order from the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessagesPerField {
    errors: BTreeMap<String, Vec<String>>,
}

impl MessagesPerField {
    /// Creates an empty set (no field has an error).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field.
    #[must_use]
    pub fn with_error(mut self, field: impl Into<String>, error: impl Into<String>) -> Self {
        self.errors
            .entry(field.into())
            .or_default()
            .push(error.into());
        self
    }

    /// Returns true if any of the given fields has an error.
    #[must_use]
    pub fn exists_error(&self, fields: &[&str]) -> bool {
        fields.iter().any(|field| {
            self.errors
                .get(*field)
                .is_some_and(|errors| !errors.is_empty())
        })
    }

    /// Returns the first error of the first field, in the given order, that has one.
    #[must_use]
    pub fn get_first_error(&self, fields: &[&str]) -> Option<&str> {
        fields.iter().find_map(|field| {
            self.errors
                .get(*field)
                .and_then(|errors| errors.first())
                .map(String::as_str)
        })
    }

    /// Returns all errors of a field.
    #[must_use]
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_errors() {
        let messages = MessagesPerField::new();
        assert!(!messages.exists_error(&["username", "password"]));
        assert_eq!(messages.get_first_error(&["username", "password"]), None);
    }

    #[test]
    fn exists_error_checks_any_field() {
        let messages = MessagesPerField::new().with_error("password", "Invalid password.");
        assert!(messages.exists_error(&["username", "password"]));
        assert!(!messages.exists_error(&["username"]));
    }

    #[test]
    fn first_error_follows_field_order() {
        let messages = MessagesPerField::new()
            .with_error("password", "Invalid password.")
            .with_error("username", "Invalid username.")
            .with_error("username", "Second username error.");
        assert_eq!(
            messages.get_first_error(&["username", "password"]),
            Some("Invalid username.")
        );
        assert_eq!(
            messages.get_first_error(&["password", "username"]),
            Some("Invalid password.")
        );
    }

    #[test]
    fn empty_error_list_is_not_an_error() {
        let messages: MessagesPerField =
            serde_json::from_str(r#"{"username": []}"#).expect("valid json");
        assert!(!messages.exists_error(&["username"]));
        assert!(messages.errors_for("username").is_empty());
        assert!(messages.errors_for("email").is_empty());
    }

    #[test]
    fn message_deserializes_type_field() {
        let message: Message =
            serde_json::from_str(r#"{"type": "warning", "summary": "Heads up"}"#)
                .expect("valid json");
        assert_eq!(message.message_type, MessageType::Warning);
        assert_eq!(message.message_type.as_str(), "warning");
    }
}
