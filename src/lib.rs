//! envseed - Bootstrap secrets and env files for a self-hosted Supabase stack.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Generate → render → write pipeline
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # File names, endpoints, secret lengths
//!     ├── random        # CSPRNG string generation
//!     ├── token         # Signed role tokens (TokenSigner trait)
//!     ├── bundle        # SecretBundle generation
//!     ├── render        # .env / frontend.env / backend.env templates
//!     ├── hosts         # Hosts file sinks (HostsSink trait)
//!     ├── writer        # Artifact writer
//!     └── types         # Hostname, Artifacts
//! ```
//!
//! # Features
//!
//! - One bundle feeds every file, so shared values always agree
//! - Both role tokens are signed with the bundle's own JWT secret
//! - Unbiased alphanumeric secrets from the OS random source
//! - Injectable hosts target for tests and dry environments

pub mod cli;
pub mod core;
pub mod error;
