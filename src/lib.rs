//! Smarthomie API library
//!
//! Application modules served by the `smarthomie-api` binary: a greeting at
//! `/` and an in-memory book list at `/books`.

pub mod modules;

/// Re-export commonly used types
pub use modules::*;
