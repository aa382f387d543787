//! Error types for the session boundary.

use thiserror::Error;

/// Errors surfaced by the auth bridge around the core.
///
/// The core's own operations are infallible in-memory mutations; everything
/// here belongs to the collaborator that signs users in and persists the
/// profile marker.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no account found for: {0}")]
    UnknownAccount(String),

    #[error("profile storage error: {0}")]
    ProfileStorage(#[from] std::io::Error),

    #[error("profile marker is corrupt: {0}")]
    CorruptProfile(#[from] serde_json::Error),
}
