use chrono::NaiveDate;
use thiserror::Error;

use memento_capture_core::CaptureError;

/// Errors raised at the persistence boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("a title is required")]
    MissingTitle,

    #[error("at least one viewer with a name and an email or phone is required")]
    NoViewers,

    #[error("delivery date {0} must be in the future")]
    DeliveryDateNotInFuture(NaiveDate),

    #[error("unknown category: {0}")]
    InvalidCategory(String),

    #[error("unknown prompt index: {0}")]
    UnknownPrompt(usize),

    #[error("message not found: {0}")]
    NotFound(String),

    #[error("not signed in")]
    NotSignedIn,

    #[error("user id must not be blank")]
    InvalidUser,

    #[error("library belongs to {owner}, not {user}")]
    OwnerMismatch { owner: String, user: String },

    #[error("artifact contains no media")]
    EmptyArtifact,

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Capture(#[from] CaptureError),
}
