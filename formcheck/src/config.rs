//! Form configuration types.

use std::time::Duration;

use crate::banner::{DEFAULT_BANNER_DELAY, DEFAULT_BANNER_MESSAGE};
use crate::validation::{CONTACT_FIELDS, FieldSpec};

/// Identifiers and timings the engine relies on.
///
/// The defaults describe the contact page's markup.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Main content container; the success banner is inserted at its top.
    pub container_id: String,

    /// Submit control.
    pub submit_id: String,

    /// Marker attribute carried by the success banner.
    pub banner_marker: String,

    /// Text of the success banner.
    pub banner_message: String,

    /// How long the success banner stays on the page.
    pub banner_delay: Duration,

    /// Fields to validate, in page order.
    pub fields: Vec<FieldSpec>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            container_id: "main".to_string(),
            submit_id: "test-contact-submit".to_string(),
            banner_marker: "test-contact-success".to_string(),
            banner_message: DEFAULT_BANNER_MESSAGE.to_string(),
            banner_delay: DEFAULT_BANNER_DELAY,
            fields: CONTACT_FIELDS.to_vec(),
        }
    }
}

impl FormConfig {
    /// Create the default contact-form config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the main container identifier.
    pub fn container(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    /// Set the submit control identifier.
    pub fn submit(mut self, id: impl Into<String>) -> Self {
        self.submit_id = id.into();
        self
    }

    /// Set the marker carried by the success banner.
    pub fn banner_marker(mut self, marker: impl Into<String>) -> Self {
        self.banner_marker = marker.into();
        self
    }

    /// Set the success banner text.
    pub fn banner_message(mut self, message: impl Into<String>) -> Self {
        self.banner_message = message.into();
        self
    }

    /// Set how long the success banner stays visible.
    pub fn banner_delay(mut self, delay: Duration) -> Self {
        self.banner_delay = delay;
        self
    }
}
