use crate::catalog::{render, ErrorKind};

/// A structural validation failure.
///
/// Carries the machine-readable kind, the raw parameter bindings, and the
/// rendered message. Callers that want structured handling match on
/// [`ValidateError::kind`] and read [`ValidateError::params`] instead of
/// parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidateError {
    kind: ErrorKind,
    params: Vec<(&'static str, String)>,
    message: String,
}

impl ValidateError {
    /// Build a failure for `kind`, rendering its message from `params`.
    pub fn new(kind: ErrorKind, params: Vec<(&'static str, String)>) -> Self {
        let message = render(kind.template(), &params);
        Self {
            kind,
            params,
            message,
        }
    }

    /// Shorthand for a kind with no parameters.
    pub fn bare(kind: ErrorKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// The failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The raw parameter bindings supplied by the failing check.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Look up one parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The rendered, ready-to-display message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;
