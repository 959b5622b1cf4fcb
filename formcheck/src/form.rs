//! The contact form controller.
//!
//! Routes page events to validation, shows the success banner and moves focus
//! after a failed submit.

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info};

use crate::banner::{BannerId, PendingRemoval, SuccessBanner};
use crate::config::FormConfig;
use crate::event::{EventOutcome, FormEvent, Key};
use crate::port::FormPort;
use crate::setup::Lifecycle;
use crate::validation::{FieldError, FieldSpec, ValidationResult, Validator, validate_field};

/// Validation state of a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Not validated since the page loaded or the form was reset.
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl From<&ValidationResult> for FieldState {
    fn from(result: &ValidationResult) -> Self {
        if result.is_valid() {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// Result of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form was cleared and a banner shown.
    Sent { banner: BannerId },
    /// At least one field failed.
    Rejected {
        /// Field that received focus, if any field is flagged invalid.
        focused: Option<&'static str>,
        errors: Vec<FieldError>,
    },
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

/// Elements the form listens to once attached.
#[derive(Debug, Clone, Default)]
pub(crate) struct Listeners {
    /// Fields with blur and input handlers.
    pub(crate) fields: Vec<&'static str>,
    /// Single-line fields where Enter submits.
    pub(crate) enter: Vec<&'static str>,
    /// Submit control with a click handler.
    pub(crate) submit: Option<String>,
}

/// A contact form bound to a page.
///
/// The form starts detached and ignores every event until
/// [`start`](Self::start) or [`attach`](Self::attach) succeeds.
pub struct ContactForm<P: FormPort> {
    pub(crate) port: P,
    pub(crate) config: FormConfig,
    pub(crate) validator: Validator,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) listeners: Listeners,
    states: HashMap<&'static str, FieldState>,
    pending_removal: Option<PendingRemoval>,
}

impl<P: FormPort> ContactForm<P> {
    /// Create a detached form over a page.
    pub fn new(port: P, config: FormConfig) -> Self {
        let validator = Validator::new(config.fields.clone());
        Self {
            port,
            config,
            validator,
            lifecycle: Lifecycle::default(),
            listeners: Listeners::default(),
            states: HashMap::new(),
            pending_removal: None,
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Current state of a field.
    pub fn field_state(&self, id: &str) -> FieldState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Dispatch a page event.
    pub fn handle(&mut self, event: &FormEvent, now: Instant) -> EventOutcome {
        if let FormEvent::ContentLoaded = event {
            return if self.content_loaded().is_ok() && self.is_attached() {
                EventOutcome::Handled
            } else {
                EventOutcome::Ignored
            };
        }

        if !self.is_attached() {
            return EventOutcome::Ignored;
        }

        match event {
            FormEvent::Blur { target } => match self.listened_field(target) {
                Some(spec) => {
                    self.blur(&spec);
                    EventOutcome::Handled
                }
                None => EventOutcome::Ignored,
            },
            FormEvent::Input { target } => match self.listened_field(target) {
                Some(spec) => {
                    // Hide the message only; the state changes on the next blur or submit.
                    self.port.clear_error(spec.error_slot);
                    EventOutcome::Handled
                }
                None => EventOutcome::Ignored,
            },
            FormEvent::Key {
                target,
                key: Key::Enter,
            } if self.listeners.enter.iter().any(|id| *id == target.as_str()) => {
                debug!("Enter in {} submits the form", target);
                self.submit(now);
                EventOutcome::Handled
            }
            FormEvent::Click { target } if self.listeners.submit.as_ref() == Some(target) => {
                self.submit(now);
                EventOutcome::Handled
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Validate all fields and either confirm the message or focus the first
    /// invalid field.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        info!("Submitting contact form");
        let validation = self.validator.validate_all(&mut self.port);

        for spec in self.validator.fields() {
            let invalid = validation.errors().iter().any(|e| e.field_id == spec.id);
            let state = if invalid {
                FieldState::Invalid
            } else {
                FieldState::Valid
            };
            self.states.insert(spec.id, state);
        }

        if validation.is_valid() {
            let banner = self.show_success(now);
            self.validator.clear_values(&mut self.port);
            self.validator.clear_errors(&mut self.port);
            self.states.clear();
            info!("Contact form sent");
            return SubmitOutcome::Sent { banner };
        }

        let focused = self.validator.first_flagged(&self.port).map(|spec| spec.id);
        if let Some(id) = focused {
            self.port.focus(id);
        }
        info!(
            "Contact form rejected: {} invalid field(s), focus on {:?}",
            validation.errors().len(),
            focused
        );
        SubmitOutcome::Rejected {
            focused,
            errors: validation.errors().to_vec(),
        }
    }

    /// When the pending banner removal is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_removal.map(|pending| pending.due)
    }

    /// Run the pending banner removal if it is due.
    /// Returns true if a banner was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_removal {
            Some(pending) if pending.is_due(now) => {
                self.pending_removal = None;
                let removed = self.port.remove_banner(pending.banner);
                debug!("Banner {} expired (removed={})", pending.banner, removed);
                removed
            }
            _ => false,
        }
    }

    fn listened_field(&self, id: &str) -> Option<FieldSpec> {
        if !self.listeners.fields.iter().any(|f| *f == id) {
            return None;
        }
        self.validator.field(id).copied()
    }

    fn blur(&mut self, spec: &FieldSpec) {
        let result = validate_field(&mut self.port, spec);
        self.states.insert(spec.id, FieldState::from(&result));
    }

    /// Replace any banner on the page with a fresh one and schedule its removal.
    fn show_success(&mut self, now: Instant) -> BannerId {
        if let Some(existing) = self.port.find_banner(&self.config.banner_marker) {
            self.port.remove_banner(existing);
        }

        let banner = SuccessBanner::new(&self.config.banner_marker, &self.config.banner_message);
        let id = banner.id;
        self.port.insert_banner(&self.config.container_id, banner);
        self.port.scroll_into_view(id);

        // Replaces any earlier removal; that banner is already gone.
        self.pending_removal = Some(PendingRemoval::new(id, now, self.config.banner_delay));
        id
    }
}
