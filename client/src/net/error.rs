//! API error type and backend error classification.
//!
//! ERROR HANDLING
//! ==============
//! Every API wrapper returns `Result<_, ApiError>`. Pages never inspect the
//! variants directly; they hand the error to the notifier, which uses
//! [`ApiError::kind`] and [`ApiError::message`] to build the user-facing text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Shown when neither the response nor the transport yields a message.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("{0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<ErrorBody> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

/// Backend error categories surfaced with a distinct prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Database,
    NotFound,
    Conflict,
    File,
    Other,
}

impl ErrorKind {
    /// Classify from the envelope's `type` discriminator. Of the backend's
    /// `error.code` values only `VALIDATION_ERROR` carries a prefix; other codes
    /// show the bare message.
    pub fn classify(body: &ErrorBody) -> Self {
        if let Some(kind) = body.kind.as_deref() {
            let by_type = match kind {
                "ValidationError" => Some(Self::Validation),
                "DatabaseError" => Some(Self::Database),
                "NotFoundError" => Some(Self::NotFound),
                "ConflictError" => Some(Self::Conflict),
                "FileError" => Some(Self::File),
                _ => None,
            };
            if let Some(kind) = by_type {
                return kind;
            }
        }
        match body.error.as_ref().and_then(|e| e.code.as_deref()) {
            Some("VALIDATION_ERROR") => Self::Validation,
            _ => Self::Other,
        }
    }

    /// Prefix prepended to the message in notices.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Validation => Some("Validation Error"),
            Self::Database => Some("Database Error"),
            Self::NotFound => Some("Not Found"),
            Self::Conflict => Some("Conflict"),
            Self::File => Some("File Error"),
            Self::Other => None,
        }
    }
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Status { body: Some(body), .. } => ErrorKind::classify(body),
            _ => ErrorKind::Other,
        }
    }

    /// Human-readable message: `error.message`, then `detail`, then `message`.
    pub fn message(&self) -> String {
        match self {
            Self::Status { body: Some(body), .. } => body
                .error
                .as_ref()
                .and_then(|e| e.message.clone())
                .or_else(|| body.detail.clone())
                .or_else(|| body.message.clone())
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned()),
            Self::Status { body: None, .. } => FALLBACK_MESSAGE.to_owned(),
            Self::Network(msg) | Self::Decode(msg) if !msg.trim().is_empty() => msg.clone(),
            Self::Network(_) | Self::Decode(_) => FALLBACK_MESSAGE.to_owned(),
            Self::Unavailable => self.to_string(),
        }
    }

    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
