//! # vrma
//!
//! Rust parser for VRMA/GLB binary animation containers.
//!
//! VRMA is the VRM animation format, a glTF 2.0 binary (GLB) container
//! carrying humanoid animation data. This crate reads the container layout
//! (header, JSON chunk, binary buffer chunk), decodes the JSON chunk into a
//! typed document, and derives timing metadata (duration, framerate, frame
//! count) from the animation samplers' input accessors.
//!
//! ## Modules
//!
//! - [`util`] - Error handling and filename recognition
//! - [`glb`] - Low-level GLB binary chunked container
//! - [`document`] - Typed glTF document model (the JSON chunk)
//! - [`meta`] - Animation metadata derivation
//!
//! ## Example
//!
//! ```ignore
//! use vrma::extract_metadata;
//!
//! let bytes = std::fs::read("wave.vrma")?;
//! let meta = extract_metadata(&bytes);
//! println!("{}s at {} fps", meta.duration, meta.framerate);
//! ```
//!
//! [`extract_metadata`] never fails: unparsable or animation-less input
//! yields the default record and the cause is reported through `tracing`.

pub mod util;
pub mod glb;
pub mod document;
pub mod meta;

// Re-export commonly used types
pub use util::{Error, Result};
pub use meta::{extract_metadata, AnimationMetadata};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{is_container_filename, Error, Result};
    pub use crate::glb::Glb;
    pub use crate::document::{Accessor, Animation, Document, Sampler};
    pub use crate::meta::{extract_metadata, AnimationMetadata, DEFAULT_FRAMERATE};
}
