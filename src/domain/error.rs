//! Error types for the admin console.
//!
//! This module defines the centralized error type [`AdminError`] and a type alias
//! [`Result`] used throughout the crate. Errors are derived with `thiserror`.
//!
//! Two categories matter to the pages: validation errors (local, many messages,
//! block submission) and transport errors (remote, one normalized message).
//! Everything else is plumbing around configuration, themes and local files.

use thiserror::Error;

/// The main error type for admin console operations.
///
/// # Examples
///
/// ```
/// use horarios_admin::domain::AdminError;
///
/// let err = AdminError::Transport("El espacio ya existe.".to_string());
/// assert_eq!(err.to_string(), "El espacio ya existe.");
/// assert_eq!(err.messages(), vec!["El espacio ya existe.".to_string()]);
/// ```
#[derive(Debug, Error)]
pub enum AdminError {
    /// A REST call failed.
    ///
    /// The string is already normalized for display: it is either the message
    /// extracted from the response body or a localized fallback.
    #[error("{0}")]
    Transport(String),

    /// Client-side form validation rejected the input.
    ///
    /// Carries every message produced by the validator, in field order.
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The local fixture backend could not read or write its data file.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdminError {
    /// Returns the error as the list of messages shown inline in a form.
    ///
    /// Validation errors expand to each of their messages; every other error
    /// becomes a single-element list.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }

    /// Returns `true` when the error came from the REST backend.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// A specialized `Result` type for admin console operations.
pub type Result<T> = std::result::Result<T, AdminError>;
