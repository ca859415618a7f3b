//! Shared types for the roster workspace
//!
//! Domain models, the unified error system, and small utilities used by
//! the server crate.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
