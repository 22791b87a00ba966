use crate::composition::model::AnimationConfig;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LogomotiveError, LogomotiveResult};

/// Base radius of the square at a hypothetical frame 0.
const RADIUS_BASE: u64 = 20;
/// Radius growth per frame.
const RADIUS_STEP: u64 = 10;
/// Rotation applied per frame, in degrees.
const ROTATION_STEP_DEGREES: u64 = 45;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Fully evaluated geometry parameters for one frame.
///
/// A plan is derived from `(AnimationConfig, FrameIndex)` alone and is
/// consumed by [`crate::compile_frame`]; nothing persists across frames.
pub struct ShapePlan {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Circumradius of the square, strictly increasing across the sequence.
    pub radius: u64,
    /// Square rotation in degrees. Not wrapped: frame 8 evaluates to 360,
    /// which displays identically to 0.
    pub rotation_degrees: u64,
    /// Whether the outer ring is drawn (frames 3 and later).
    pub show_outer_ring: bool,
    /// Whether the inner pulse dot is drawn (even frames).
    pub show_inner_dot: bool,
}

/// Evaluate the geometry parameters for one frame.
///
/// Fails with [`LogomotiveError::InvalidFrameIndex`] when `frame` lies outside
/// `[1, total_frames]`; out-of-range indices are rejected before any drawing
/// work rather than clamped.
#[tracing::instrument(skip(config))]
pub fn plan_frame(config: &AnimationConfig, frame: FrameIndex) -> LogomotiveResult<ShapePlan> {
    config.validate()?;
    if !config.frame_range().contains(frame) {
        return Err(LogomotiveError::InvalidFrameIndex {
            frame: frame.0,
            total: config.total_frames,
        });
    }

    Ok(ShapePlan {
        frame,
        radius: RADIUS_BASE + RADIUS_STEP * frame.0,
        rotation_degrees: ROTATION_STEP_DEGREES * frame.0,
        show_outer_ring: frame.0 > 2,
        show_inner_dot: frame.0 % 2 == 0,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/plan.rs"]
mod tests;
