//! Contact-form validation.
//!
//! Rules are pure functions from field text to a [`ValidationResult`]. The
//! [`Validator`] binds each rule to its field and error slot and reflects the
//! verdicts on the page through a [`FormPort`](crate::port::FormPort).
//!
//! # Example
//!
//! ```
//! use formcheck::page::MemoryPage;
//! use formcheck::validation::Validator;
//! use formcheck::FormConfig;
//!
//! let config = FormConfig::default();
//! let mut page = MemoryPage::contact(&config);
//! page.set_value("email", "name@example.com");
//!
//! let result = Validator::contact().validate_all(&mut page);
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.first_invalid_field(), Some("fullname"));
//! assert_eq!(page.error("error-name"), Some("Full name is required"));
//! assert_eq!(page.error("error-email"), None);
//! ```

mod field;
mod result;
pub mod rules;
mod validator;

pub use field::{CONTACT_FIELDS, EMAIL, FULL_NAME, FieldSpec, MESSAGE, SUBJECT};
pub use result::{FieldError, FormValidation, ValidationResult};
pub use rules::Rule;
pub use validator::{Validator, validate_field};
