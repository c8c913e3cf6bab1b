//! Core library components.
//!
//! Secret generation, template rendering and output writing. Nothing here
//! prints to the terminal; the CLI layer owns user-facing output.

pub mod bundle;
pub mod constants;
pub mod hosts;
pub mod random;
pub mod render;
pub mod token;
pub mod types;
pub mod writer;
