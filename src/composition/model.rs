use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{Canvas, FrameIndex, FrameRange};
use crate::foundation::error::{LogomotiveError, LogomotiveResult};

// vello_cpu surfaces are addressed with u16 coordinates.
const MAX_CANVAS_DIM: u32 = u16::MAX as u32;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Process-wide animation constants.
///
/// A configuration is a pure data model that can be:
/// - used as-is via [`AnimationConfig::default`] (the stock logo look)
/// - deserialized from JSON via [`AnimationConfig::from_path`], where every
///   field is optional and defaults to the stock value
///
/// Rendering against a configuration is performed by the pipeline:
/// [`crate::compose_frame`] / [`crate::render_to_png_sequence`].
pub struct AnimationConfig {
    /// Output canvas dimensions.
    #[serde(default = "default_canvas")]
    pub canvas: Canvas,
    /// Total number of frames in the sequence; valid indices are `1..=total_frames`.
    #[serde(default = "default_total_frames")]
    pub total_frames: u64,
    /// Background color the canvas is cleared to (RGBA8, straight alpha).
    #[serde(default = "default_background_rgba8")]
    pub background_rgba8: [u8; 4],
    /// Primary shape color (RGBA8, straight alpha).
    #[serde(default = "default_primary_rgba8")]
    pub primary_rgba8: [u8; 4],
    /// Secondary shape color (RGBA8, straight alpha).
    #[serde(default = "default_secondary_rgba8")]
    pub secondary_rgba8: [u8; 4],
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            canvas: default_canvas(),
            total_frames: default_total_frames(),
            background_rgba8: default_background_rgba8(),
            primary_rgba8: default_primary_rgba8(),
            secondary_rgba8: default_secondary_rgba8(),
        }
    }
}

impl AnimationConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to the stock defaults, so a partial object
    /// overrides only what it names.
    pub fn from_path(path: impl AsRef<Path>) -> LogomotiveResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| LogomotiveError::serde(format!("parse config '{}': {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate invariants that the type system cannot express.
    pub fn validate(&self) -> LogomotiveResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(LogomotiveError::validation(
                "canvas dimensions must be >= 1",
            ));
        }
        if self.canvas.width > MAX_CANVAS_DIM || self.canvas.height > MAX_CANVAS_DIM {
            return Err(LogomotiveError::validation(format!(
                "canvas dimensions must be <= {MAX_CANVAS_DIM}"
            )));
        }
        if self.total_frames == 0 {
            return Err(LogomotiveError::validation("total_frames must be >= 1"));
        }
        Ok(())
    }

    /// The valid frame domain `[1, total_frames]` as a half-open range.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(1),
            end: FrameIndex(self.total_frames.saturating_add(1)),
        }
    }
}

fn default_canvas() -> Canvas {
    Canvas {
        width: 200,
        height: 200,
    }
}

fn default_total_frames() -> u64 {
    8
}

fn default_background_rgba8() -> [u8; 4] {
    [0, 0, 0, 0]
}

// Brand orange #f97316.
fn default_primary_rgba8() -> [u8; 4] {
    [249, 115, 22, 255]
}

fn default_secondary_rgba8() -> [u8; 4] {
    [255, 255, 255, 255]
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
