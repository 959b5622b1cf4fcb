/// Verdict produced by a single rule.
///
/// The message is empty when the value passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    /// A passing verdict.
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing verdict with a user-facing message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Check if the value passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Check if the value failed.
    pub fn is_invalid(&self) -> bool {
        !self.valid
    }

    /// The failure message, or `""` for a passing verdict.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Information about a single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field identifier (for focusing).
    pub field_id: &'static str,
    /// Error slot the message was written to.
    pub error_slot: &'static str,
    /// Error message.
    pub message: String,
}

/// Result of validating every field of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormValidation {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in field order.
    Invalid(Vec<FieldError>),
}

impl FormValidation {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the identifier of the first invalid field.
    pub fn first_invalid_field(&self) -> Option<&'static str> {
        self.first_error().map(|e| e.field_id)
    }
}
