//! Domain types shared by the renderer and writer.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public hostname the backend is reachable at.
///
/// Taken verbatim from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname(String);

impl Hostname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Hostname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three rendered env files.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Artifacts {
    /// Platform configuration (`.env`)
    pub platform: String,
    /// Frontend configuration (`frontend.env`)
    pub frontend: String,
    /// Backend configuration (`backend.env`)
    pub backend: String,
}

impl std::fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifacts")
            .field("platform", &self.platform.len())
            .field("frontend", &self.frontend.len())
            .field("backend", &self.backend.len())
            .finish()
    }
}
