//! Error types for REST operations.
//!
//! Provides structured error classification for the four failure families
//! the backend can produce (transport, validation, not-found, server) plus
//! local failures, and a cloneable [`ErrorDetail`] form that snapshots store.

use serde::Deserialize;
use thiserror::Error;

use crate::model::EntityId;

/// Errors that can occur while talking to the gallery backend.
#[derive(Debug, Error)]
pub enum RestError {
    /// Network or transport failure before a response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The requested entity does not exist.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: EntityId },

    /// The server rejected the payload (4xx with optional field errors).
    #[error("Validation failed ({status}): {message}")]
    Validation {
        status: u16,
        message: String,
        field_errors: Vec<FieldError>,
    },

    /// The server failed to process the request (5xx).
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A mutation was attempted on an entity without an identity key.
    #[error("Entity has no identity key; {operation} requires a persisted entity")]
    MissingId { operation: &'static str },
}

impl RestError {
    /// Error family string used in logs and stored error details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RestError::Transport(_) => ErrorKind::Transport,
            RestError::NotFound { .. } => ErrorKind::NotFound,
            RestError::Validation { .. } => ErrorKind::Validation,
            RestError::Server { .. } => ErrorKind::Server,
            RestError::Decode(_) => ErrorKind::Decode,
            RestError::MissingId { .. } => ErrorKind::MissingId,
        }
    }

    /// Convert into the cloneable form kept in a snapshot's `last_error`.
    pub fn detail(&self) -> ErrorDetail {
        let status = match self {
            RestError::NotFound { .. } => Some(404),
            RestError::Validation { status, .. } | RestError::Server { status, .. } => Some(*status),
            RestError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        };
        let field_errors = match self {
            RestError::Validation { field_errors, .. } => field_errors.clone(),
            _ => Vec::new(),
        };

        ErrorDetail {
            kind: self.kind(),
            status,
            message: self.to_string(),
            field_errors,
        }
    }
}

/// Error family discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    NotFound,
    Validation,
    Server,
    Decode,
    MissingId,
}

/// A single field-level validation failure reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default, rename = "objectName")]
    pub object_name: String,
    pub field: String,
    pub message: String,
}

/// Cloneable error description stored in [`Snapshot::last_error`].
///
/// [`Snapshot::last_error`]: crate::store::Snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
    pub field_errors: Vec<FieldError>,
}

/// Shape of the backend's problem-details error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ProblemDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default, rename = "fieldErrors")]
    pub field_errors: Vec<FieldError>,
}

impl ProblemDetails {
    pub fn message(&self) -> String {
        self.detail
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| "Request rejected".to_string())
    }
}
