//! Typed glTF document model.
//!
//! The JSON chunk of a GLB container holds a glTF 2.0 document. Only the
//! structures needed for animation timing are modeled; unknown fields are
//! ignored on decode. Optional fields are explicit [`Option`]s so absent
//! keys never surface as lookup failures downstream.

mod types;

pub use types::*;
