//! Utility types and functions.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`is_container_filename`] - Suffix recognition for upload flows

mod error;
mod filename;

pub use error::*;
pub use filename::*;
