//! Pure validation rules, one per contact field.
//!
//! Every rule trims the raw value before checking it and never touches the page.
//! Trimming and lengths follow browser string semantics: U+FEFF counts as
//! whitespace and lengths are UTF-16 code units.

use std::sync::LazyLock;

use regex::Regex;

use super::ValidationResult;

/// Signature shared by all field rules.
pub type Rule = fn(&str) -> ValidationResult;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern should compile")
});

/// Full name: required, at least 2 characters.
pub fn full_name(value: &str) -> ValidationResult {
    required_with_min_length(
        value,
        2,
        "Full name is required",
        "Name must be at least 2 characters",
    )
}

/// Email: required, shaped like `local@domain.tld`.
pub fn email(value: &str) -> ValidationResult {
    let trimmed = trim(value);
    if trimmed.is_empty() {
        return ValidationResult::invalid("Email is required");
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return ValidationResult::invalid("Please enter a valid email (e.g., name@example.com)");
    }
    ValidationResult::valid()
}

/// Subject: required, at least 3 characters.
pub fn subject(value: &str) -> ValidationResult {
    required_with_min_length(
        value,
        3,
        "Subject is required",
        "Subject must be at least 3 characters",
    )
}

/// Message body: required, at least 10 characters.
pub fn message(value: &str) -> ValidationResult {
    required_with_min_length(
        value,
        10,
        "Message is required",
        "Message must be at least 10 characters",
    )
}

fn required_with_min_length(
    value: &str,
    min: usize,
    required_msg: &str,
    too_short_msg: &str,
) -> ValidationResult {
    let trimmed = trim(value);
    if trimmed.is_empty() {
        return ValidationResult::invalid(required_msg);
    }
    if text_length(trimmed) < min {
        return ValidationResult::invalid(too_short_msg);
    }
    ValidationResult::valid()
}

/// Strip leading and trailing whitespace, including the byte order mark.
fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length in UTF-16 code units; characters outside the BMP count twice.
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}
