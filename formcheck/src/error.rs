use thiserror::Error;

/// Errors that can occur when attaching the form to a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The main content container is not on the page.
    #[error("Form elements not found: missing container '{0}'")]
    MissingContainer(String),

    /// The submit control is not on the page.
    #[error("Form elements not found: missing submit control '{0}'")]
    MissingSubmit(String),
}
