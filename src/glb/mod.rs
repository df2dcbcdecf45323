//! Low-level GLB binary chunked container.
//!
//! GLB is the binary form of glTF 2.0 and the outer layout of VRMA files.
//! This module provides direct read/write access to the container; the JSON
//! chunk contents are decoded by [`crate::document`].
//!
//! ## File Structure
//!
//! ```text
//! +------------------+
//! | Magic: "glTF"    |  4 bytes
//! +------------------+
//! | Version          |  4 bytes (u32 LE, always 2)
//! +------------------+
//! | Total Length     |  4 bytes (u32 LE)
//! +------------------+
//! | Chunk Length     |  4 bytes (u32 LE)
//! | Chunk Type: JSON |  4 bytes
//! | ... JSON ...     |  padded to 4 bytes with spaces
//! +------------------+
//! | Chunk Length     |  4 bytes (u32 LE)
//! | Chunk Type: BIN  |  4 bytes (optional chunk)
//! | ... Buffer ...   |  padded to 4 bytes with zeros
//! +------------------+
//! ```

mod format;
mod reader;
mod writer;

pub use format::*;
pub use reader::*;
pub use writer::*;
