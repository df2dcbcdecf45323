//! Animation metadata derivation.
//!
//! The high-level API over [`crate::glb`] and [`crate::document`]: parse a
//! container, walk the animation samplers' time accessors, and derive
//! duration, framerate, and frame count.

mod extract;

pub use extract::*;
