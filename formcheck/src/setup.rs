//! Attaching the form to its page.

use log::{debug, error, info};

use crate::error::SetupError;
use crate::form::{ContactForm, Listeners};
use crate::port::FormPort;

/// Loading state of the page when the form starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// Content is still loading; setup waits for [`FormEvent::ContentLoaded`](crate::event::FormEvent::ContentLoaded).
    Loading,
    Interactive,
    Complete,
}

/// Where the form is in its setup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Not started.
    #[default]
    Detached,
    /// Waiting for the page content to load.
    AwaitingContent,
    /// Listening to page events.
    Attached,
    /// Required elements were missing; nothing is attached.
    Failed(SetupError),
}

impl<P: FormPort> ContactForm<P> {
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Attached)
    }

    /// Attach now, or defer until the content has loaded.
    pub fn start(&mut self, ready: ReadyState) -> Result<(), SetupError> {
        match ready {
            ReadyState::Loading => {
                debug!("Page still loading, deferring form setup");
                self.lifecycle = Lifecycle::AwaitingContent;
                Ok(())
            }
            ReadyState::Interactive | ReadyState::Complete => self.attach(),
        }
    }

    /// Run deferred setup. Does nothing unless setup is waiting for content.
    pub fn content_loaded(&mut self) -> Result<(), SetupError> {
        if self.lifecycle == Lifecycle::AwaitingContent {
            self.attach()
        } else {
            Ok(())
        }
    }

    /// Check the page scaffolding and start listening to events.
    ///
    /// Fails without attaching anything when the main container or the submit
    /// control is missing. Fields missing from the page get no listeners.
    pub fn attach(&mut self) -> Result<(), SetupError> {
        if self.is_attached() {
            return Ok(());
        }

        if let Err(e) = self.check_scaffolding() {
            error!("{}", e);
            self.listeners = Listeners::default();
            self.lifecycle = Lifecycle::Failed(e.clone());
            return Err(e);
        }

        let mut listeners = Listeners {
            submit: Some(self.config.submit_id.clone()),
            ..Default::default()
        };
        for spec in self.validator.fields() {
            if !self.port.has_element(spec.id) {
                debug!("Field {} not on page, skipping", spec.id);
                continue;
            }
            listeners.fields.push(spec.id);
            if !spec.multiline {
                listeners.enter.push(spec.id);
            }
        }

        info!(
            "Contact form attached: {} field(s), submit '{}'",
            listeners.fields.len(),
            self.config.submit_id
        );
        self.listeners = listeners;
        self.lifecycle = Lifecycle::Attached;
        Ok(())
    }

    fn check_scaffolding(&self) -> Result<(), SetupError> {
        if !self.port.has_element(&self.config.container_id) {
            return Err(SetupError::MissingContainer(self.config.container_id.clone()));
        }
        if !self.port.has_element(&self.config.submit_id) {
            return Err(SetupError::MissingSubmit(self.config.submit_id.clone()));
        }
        Ok(())
    }
}
