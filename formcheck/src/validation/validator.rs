//! Field orchestration: runs rules against page text and reflects verdicts on the page.

use log::debug;

use super::field::{CONTACT_FIELDS, FieldSpec};
use super::result::{FieldError, FormValidation, ValidationResult};
use crate::port::FormPort;

/// Validate one field and update its error slot and "invalid" flag.
///
/// A missing field validates as the empty string.
pub fn validate_field<P: FormPort + ?Sized>(port: &mut P, spec: &FieldSpec) -> ValidationResult {
    let value = port.field_value(spec.id).unwrap_or_default();
    let result = spec.check(&value);

    if result.is_valid() {
        port.clear_error(spec.error_slot);
        port.set_invalid(spec.id, false);
    } else {
        port.show_error(spec.error_slot, result.message());
        port.set_invalid(spec.id, true);
    }

    debug!(
        "Validated {}: valid={} message={:?}",
        spec.label,
        result.is_valid(),
        result.message()
    );
    result
}

/// Owns the form's field specs for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct Validator {
    fields: Vec<FieldSpec>,
}

impl Validator {
    /// Create a validator over the given fields, kept in order.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The validator for the contact form's four fields.
    pub fn contact() -> Self {
        Self::new(CONTACT_FIELDS.to_vec())
    }

    /// All fields, in page order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by input identifier.
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Validate a single field by identifier.
    ///
    /// Returns `None` for identifiers that are not form fields.
    pub fn validate_field<P: FormPort + ?Sized>(
        &self,
        port: &mut P,
        id: &str,
    ) -> Option<ValidationResult> {
        self.field(id).map(|spec| validate_field(port, spec))
    }

    /// Validate every field.
    ///
    /// All fields are checked even after a failure, so every error slot is
    /// refreshed by a single call.
    pub fn validate_all<P: FormPort + ?Sized>(&self, port: &mut P) -> FormValidation {
        let mut errors = Vec::new();

        for spec in &self.fields {
            let result = validate_field(port, spec);
            if result.is_invalid() {
                errors.push(FieldError {
                    field_id: spec.id,
                    error_slot: spec.error_slot,
                    message: result.message().to_string(),
                });
            }
        }

        if errors.is_empty() {
            FormValidation::Valid
        } else {
            FormValidation::Invalid(errors)
        }
    }

    /// First field currently flagged invalid on the page, in field order.
    pub fn first_flagged<P: FormPort + ?Sized>(&self, port: &P) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| port.is_invalid(spec.id))
    }

    /// Empty and hide every error slot.
    pub fn clear_errors<P: FormPort + ?Sized>(&self, port: &mut P) {
        for spec in &self.fields {
            port.clear_error(spec.error_slot);
        }
    }

    /// Empty every field.
    pub fn clear_values<P: FormPort + ?Sized>(&self, port: &mut P) {
        for spec in &self.fields {
            port.set_field_value(spec.id, "");
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::contact()
    }
}
