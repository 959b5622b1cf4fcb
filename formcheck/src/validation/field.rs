use super::ValidationResult;
use super::rules::{self, Rule};

/// Binds a field to its rule and to the slot that displays its error.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Identifier of the input element.
    pub id: &'static str,
    /// Human-readable name, used in logs.
    pub label: &'static str,
    /// Rule run against the field's current text.
    pub rule: Rule,
    /// Identifier of the element showing the field's error.
    pub error_slot: &'static str,
    /// Multi-line fields keep Enter for line breaks instead of submitting.
    pub multiline: bool,
}

impl FieldSpec {
    /// Run this field's rule against a value.
    pub fn check(&self, value: &str) -> ValidationResult {
        (self.rule)(value)
    }
}

pub const FULL_NAME: FieldSpec = FieldSpec {
    id: "fullname",
    label: "full name",
    rule: rules::full_name,
    error_slot: "error-name",
    multiline: false,
};

pub const EMAIL: FieldSpec = FieldSpec {
    id: "email",
    label: "email",
    rule: rules::email,
    error_slot: "error-email",
    multiline: false,
};

pub const SUBJECT: FieldSpec = FieldSpec {
    id: "subject",
    label: "subject",
    rule: rules::subject,
    error_slot: "error-subject",
    multiline: false,
};

pub const MESSAGE: FieldSpec = FieldSpec {
    id: "message",
    label: "message",
    rule: rules::message,
    error_slot: "error-message",
    multiline: true,
};

/// The contact form's fields, in page order.
pub const CONTACT_FIELDS: [FieldSpec; 4] = [FULL_NAME, EMAIL, SUBJECT, MESSAGE];
