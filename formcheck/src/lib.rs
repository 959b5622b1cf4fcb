//! Contact-form validation engine.
//!
//! The engine validates a fixed contact form (full name, email, subject and
//! message) against any page that implements [`FormPort`].
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use formcheck::prelude::*;
//!
//! let config = FormConfig::default();
//! let mut form = ContactForm::new(MemoryPage::contact(&config), config);
//! form.start(ReadyState::Complete).unwrap();
//!
//! form.port_mut().set_value("email", "not-an-email");
//! form.handle(&FormEvent::blur("email"), Instant::now());
//!
//! assert_eq!(form.field_state("email"), FieldState::Invalid);
//! assert_eq!(
//!     form.port().error("error-email"),
//!     Some("Please enter a valid email (e.g., name@example.com)")
//! );
//! ```

pub mod banner;
pub mod config;
pub mod error;
pub mod event;
pub mod form;
pub mod page;
pub mod port;
pub mod setup;
pub mod validation;

pub use config::FormConfig;
pub use error::SetupError;
pub use form::ContactForm;
pub use port::FormPort;

pub mod prelude {
    pub use crate::banner::{BannerId, SuccessBanner};
    pub use crate::config::FormConfig;
    pub use crate::error::SetupError;
    pub use crate::event::{EventOutcome, FormEvent, Key};
    pub use crate::form::{ContactForm, FieldState, SubmitOutcome};
    pub use crate::page::MemoryPage;
    pub use crate::port::FormPort;
    pub use crate::setup::{Lifecycle, ReadyState};
    pub use crate::validation::{FormValidation, ValidationResult, Validator};
}
