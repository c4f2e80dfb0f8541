//! Otcdirect Core
//!
//! Core types, collaborator traits, and errors for the otcdirect order
//! engine.

pub mod error;
pub mod traits;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use error::*;
pub use traits::*;
pub use types::*;
pub use units::*;
