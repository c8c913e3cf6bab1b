//! Error types for envseed.
//!
//! Errors are grouped by the phase that raised them. Every variant is fatal:
//! the run stops at the first failure and files already written stay in place.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while producing the secret bundle.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("secure random source unavailable: {0}")]
    Randomness(String),

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Failures while writing artifacts.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to hosts file {}: {source}", path.display())]
    Hosts {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error came from a permission check on the hosts file.
    pub fn is_hosts_permission_denied(&self) -> bool {
        matches!(
            self,
            Error::Write(WriteError::Hosts { source, .. })
                if source.kind() == std::io::ErrorKind::PermissionDenied
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
