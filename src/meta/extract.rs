//! Best-effort timing metadata extraction.

use serde::Serialize;
use tracing::{debug, warn};

use crate::document::Document;
use crate::glb::Glb;
use crate::util::Result;

/// Fallback framerate when none can be derived. VRM animations are
/// typically authored at 30 or 60 fps.
pub const DEFAULT_FRAMERATE: u32 = 30;

/// Timing metadata of an animation container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationMetadata {
    /// Length of the longest clip in seconds, rounded to milliseconds.
    /// 0.0 when it cannot be determined.
    pub duration: f64,
    /// Keyframes per second, [`DEFAULT_FRAMERATE`] when underived.
    pub framerate: u32,
    /// Keyframe count of the densest time accessor, 0 when undetermined.
    pub frame_count: u64,
}

impl Default for AnimationMetadata {
    fn default() -> Self {
        Self {
            duration: 0.0,
            framerate: DEFAULT_FRAMERATE,
            frame_count: 0,
        }
    }
}

impl AnimationMetadata {
    /// Derive timing metadata from a decoded document.
    ///
    /// Duration is the maximum `max[0]` bound over all resolvable input
    /// accessors; frame count is the maximum element count over the same
    /// population (the two maxima may come from different samplers).
    /// Samplers whose `input` is absent or out of range contribute nothing.
    /// Accessors without a precomputed `max` bound contribute nothing to
    /// duration; raw buffer data is never decoded as a fallback, so such
    /// files report a duration of 0.
    pub fn from_document(doc: &Document) -> Self {
        if doc.animations.is_empty() {
            warn!(
                "no animations in container ({} accessors)",
                doc.accessors.len()
            );
            return Self::default();
        }
        debug!("found {} animations", doc.animations.len());

        let mut max_duration = 0.0f64;
        let mut max_count = 0u64;

        for (i, anim) in doc.animations.iter().enumerate() {
            debug!(
                "animation {i}: name={:?}, {} samplers",
                anim.name,
                anim.samplers.len()
            );
            for sampler in &anim.samplers {
                let Some(accessor) = sampler.input.and_then(|idx| doc.accessor(idx)) else {
                    continue;
                };
                // max[0] of the scalar time accessor is the clip's last
                // timestamp
                if let Some(&last) = accessor.max.as_ref().and_then(|m| m.first()) {
                    if last > max_duration {
                        max_duration = last;
                    }
                }
                if accessor.count > max_count {
                    max_count = accessor.count;
                }
            }
        }

        // Only a positive duration and count override the fallback rate
        let framerate = if max_duration > 0.0 && max_count > 0 {
            (max_count as f64 / max_duration).round() as u32
        } else {
            DEFAULT_FRAMERATE
        };

        let meta = Self {
            duration: round_ms(max_duration),
            framerate,
            frame_count: max_count,
        };
        debug!(
            "derived duration={}s framerate={} frame_count={}",
            meta.duration, meta.framerate, meta.frame_count
        );
        meta
    }
}

/// Extract timing metadata from raw container bytes.
///
/// Never fails: malformed input yields [`AnimationMetadata::default`] and
/// the cause is logged at warn level. Metadata enrichment is optional for
/// callers; an upload pipeline must not stall on a bad file.
pub fn extract_metadata(bytes: &[u8]) -> AnimationMetadata {
    match try_extract(bytes) {
        Ok(meta) => meta,
        Err(err) => {
            warn!("failed to parse animation container: {err}");
            AnimationMetadata::default()
        }
    }
}

fn try_extract(bytes: &[u8]) -> Result<AnimationMetadata> {
    debug!("extracting animation metadata from {} bytes", bytes.len());
    let glb = Glb::from_slice(bytes)?;
    let doc = Document::from_slice(glb.json())?;
    Ok(AnimationMetadata::from_document(&doc))
}

/// Round seconds to millisecond precision.
fn round_ms(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}
