//! GLB container reader implementation.

use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use memmap2::Mmap;

use super::format::*;
use crate::util::{Error, Result};

/// A decoded GLB container: header fields plus raw chunk payloads.
///
/// Only the container layout is interpreted here; the JSON chunk is kept as
/// bytes and decoded by [`crate::document::Document::from_slice`].
#[derive(Debug, Clone)]
pub struct Glb {
    version: u32,
    declared_len: u32,
    json: Vec<u8>,
    bin: Option<Vec<u8>>,
}

impl Glb {
    /// Open a file for reading with memory mapping.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let size = file.metadata()?.len();
        if size < HEADER_SIZE as u64 {
            return Err(Error::UnexpectedEof(size));
        }

        // Safety: file is opened read-only for the duration of the parse
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| Error::MmapFailed(e.to_string()))?;
        Self::from_slice(&mmap)
    }

    /// Decode a GLB container from a byte slice.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::UnexpectedEof(data.len() as u64));
        }
        if &data[..GLB_MAGIC.len()] != GLB_MAGIC {
            return Err(Error::InvalidMagic);
        }

        let mut header = Cursor::new(&data[GLB_MAGIC.len()..HEADER_SIZE]);
        let version = header.read_u32::<LittleEndian>()?;
        let declared_len = header.read_u32::<LittleEndian>()?;

        if version != SUPPORTED_VERSION {
            return Err(Error::UnsupportedVersion(version));
        }
        if declared_len as u64 > data.len() as u64 {
            return Err(Error::UnexpectedEof(data.len() as u64));
        }

        // Chunks live within the declared total length; bytes past it are
        // ignored.
        let end = declared_len as usize;
        let mut json = None;
        let mut bin = None;
        let mut offset = HEADER_SIZE;

        while offset < end {
            if offset + CHUNK_HEADER_SIZE > end {
                return Err(Error::UnexpectedEof(end as u64));
            }
            let mut chunk = Cursor::new(&data[offset..offset + CHUNK_HEADER_SIZE]);
            let len = chunk.read_u32::<LittleEndian>()? as usize;
            let kind = chunk.read_u32::<LittleEndian>()?;

            let start = offset + CHUNK_HEADER_SIZE;
            if start as u64 + len as u64 > end as u64 {
                return Err(Error::UnexpectedEof(end as u64));
            }

            if json.is_none() && !is_json_chunk(kind) {
                return Err(Error::chunk("first chunk must be JSON"));
            }
            match kind {
                CHUNK_JSON if json.is_none() => json = Some(data[start..start + len].to_vec()),
                CHUNK_BIN if bin.is_none() => bin = Some(data[start..start + len].to_vec()),
                // Unknown and duplicate chunk types are skipped
                _ => {}
            }

            offset = start + padded_len(len);
        }

        let json = json.ok_or(Error::MissingJsonChunk)?;
        Ok(Self { version, declared_len, json, bin })
    }

    /// Get the container format version.
    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Get the total length declared in the header.
    #[inline]
    pub fn declared_len(&self) -> u32 {
        self.declared_len
    }

    /// Get the JSON chunk payload (may carry trailing space padding).
    #[inline]
    pub fn json(&self) -> &[u8] {
        &self.json
    }

    /// Get the binary buffer chunk payload, if present.
    #[inline]
    pub fn bin(&self) -> Option<&[u8]> {
        self.bin.as_deref()
    }
}
