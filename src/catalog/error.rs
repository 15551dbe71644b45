//! Catalog Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by catalog lookups and roster changes.
///
/// The display text of the roster variants is what clients see as `detail`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull { activity: String },

    #[error("Participant not found")]
    ParticipantNotFound { activity: String, email: String },

    #[error("Email is required")]
    MissingEmail,

    #[error("Failed to read seed file {path:?}: {error}")]
    SeedIo { path: PathBuf, error: String },

    #[error("Failed to parse seed file {path:?}: {error}")]
    SeedParse { path: PathBuf, error: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
