//! glTF document structures decoded from the JSON chunk.

use serde::Deserialize;

use crate::util::Result;

/// A glTF 2.0 document, restricted to the animation-bearing subset.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    /// Asset block (format version, producing tool)
    pub asset: Asset,
    /// Flat, shared accessor list referenced by index
    pub accessors: Vec<Accessor>,
    /// Animation clips
    pub animations: Vec<Animation>,
    /// Binary buffer descriptions
    pub buffers: Vec<Buffer>,
}

impl Document {
    /// Decode a document from JSON chunk bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Look up an accessor by index.
    #[inline]
    pub fn accessor(&self, index: usize) -> Option<&Accessor> {
        self.accessors.get(index)
    }
}

/// The glTF asset block.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Asset {
    /// glTF format version ("2.0")
    pub version: String,
    /// Tool that produced the file
    pub generator: Option<String>,
}

/// One animation clip.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Animation {
    pub name: Option<String>,
    /// Channels binding sampler outputs to node properties
    pub channels: Vec<Channel>,
    /// Keyframe samplers; `input` indexes the shared accessor list
    pub samplers: Vec<Sampler>,
}

/// An animation channel.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Channel {
    pub sampler: Option<usize>,
}

/// A keyframe sampler pairing a time (input) accessor with a value (output)
/// accessor.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sampler {
    pub input: Option<usize>,
    pub output: Option<usize>,
    pub interpolation: Option<String>,
}

/// A typed view into the binary buffer.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accessor {
    /// Number of elements
    pub count: u64,
    /// Component type code (5126 = f32, etc.)
    pub component_type: Option<u32>,
    /// Element type ("SCALAR", "VEC3", ...)
    #[serde(rename = "type")]
    pub element_type: Option<String>,
    /// Precomputed per-component minimum, when the producer wrote one
    pub min: Option<Vec<f64>>,
    /// Precomputed per-component maximum, when the producer wrote one
    pub max: Option<Vec<f64>>,
}

/// A binary buffer description.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Buffer {
    pub byte_length: u64,
    pub uri: Option<String>,
}
