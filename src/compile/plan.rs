use kurbo::{BezPath, Ellipse, Point, Rect, Shape};

use crate::composition::model::AnimationConfig;
use crate::eval::plan::ShapePlan;
use crate::foundation::core::{Canvas, FrameIndex};

/// Number of sides of the build shape (a square).
const SQUARE_SIDES: u32 = 4;
/// Stroke width of the square outline, in pixels.
const SQUARE_STROKE_WIDTH: f64 = 3.0;
/// Stroke width of the outer ring, in pixels.
const RING_STROKE_WIDTH: f64 = 2.0;
/// Margin between the square's circumradius and the outer ring, in pixels.
const RING_MARGIN: f64 = 10.0;
/// Half-extent of the fixed-size pulse dot, in pixels.
const DOT_HALF_SIZE: f64 = 10.0;

/// Flattening tolerance when converting analytic shapes to Bezier paths.
const PATH_TOLERANCE: f64 = 0.01;

#[derive(Clone, Debug, serde::Serialize)]
/// Draw operation emitted by the compiler.
///
/// Colors are straight-alpha RGBA8; the render backend owns premultiplication.
pub enum DrawOp {
    /// Stroke the outline of a path with a centered stroke.
    StrokePath {
        /// Path geometry in canvas coordinates.
        path: BezPath,
        /// Stroke color (RGBA8, straight alpha).
        color_rgba8: [u8; 4],
        /// Stroke width in pixels.
        width: f64,
    },
    /// Fill the interior of a path.
    FillPath {
        /// Path geometry in canvas coordinates.
        path: BezPath,
        /// Fill color (RGBA8, straight alpha).
        color_rgba8: [u8; 4],
    },
}

#[derive(Clone, Debug, serde::Serialize)]
/// Backend-agnostic draw list for a single frame.
pub struct FramePlan {
    /// Frame this plan was compiled for.
    pub frame: FrameIndex,
    /// Target surface dimensions.
    pub canvas: Canvas,
    /// Color the surface is cleared to before drawing (RGBA8, straight alpha).
    pub clear_rgba8: [u8; 4],
    /// Draw operations in paint order: later ops composite over earlier ones.
    pub ops: Vec<DrawOp>,
}

/// Compile an evaluated [`ShapePlan`] into a [`FramePlan`].
///
/// The paint order is fixed: square, then outer ring, then pulse dot.
pub fn compile_frame(config: &AnimationConfig, plan: &ShapePlan) -> FramePlan {
    let center = config.canvas.center();
    let radius = plan.radius as f64;

    let mut ops = Vec::with_capacity(3);

    ops.push(DrawOp::StrokePath {
        path: regular_polygon_path(center, radius, SQUARE_SIDES, plan.rotation_degrees as f64),
        color_rgba8: config.primary_rgba8,
        width: SQUARE_STROKE_WIDTH,
    });

    if plan.show_outer_ring {
        let half = radius + RING_MARGIN;
        let bbox = Rect::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        );
        ops.push(DrawOp::StrokePath {
            path: Ellipse::from_rect(bbox).to_path(PATH_TOLERANCE),
            color_rgba8: config.secondary_rgba8,
            width: RING_STROKE_WIDTH,
        });
    }

    if plan.show_inner_dot {
        let bbox = Rect::new(
            center.x - DOT_HALF_SIZE,
            center.y - DOT_HALF_SIZE,
            center.x + DOT_HALF_SIZE,
            center.y + DOT_HALF_SIZE,
        );
        ops.push(DrawOp::FillPath {
            path: Ellipse::from_rect(bbox).to_path(PATH_TOLERANCE),
            color_rgba8: config.primary_rgba8,
        });
    }

    FramePlan {
        frame: plan.frame,
        canvas: config.canvas,
        clear_rgba8: config.background_rgba8,
        ops,
    }
}

/// Closed path of a regular polygon inscribed in a circle.
///
/// Vertex `k` sits at `rotation_degrees + 90 + k * (360 / sides)` degrees,
/// measured clockwise on the y-down canvas, so a square at rotation 45 is
/// axis-aligned and at rotation 0 (or 360) stands on a corner.
fn regular_polygon_path(center: Point, radius: f64, sides: u32, rotation_degrees: f64) -> BezPath {
    let step = 360.0 / f64::from(sides);
    let mut path = BezPath::new();
    for k in 0..sides {
        let theta = (rotation_degrees + 90.0 + f64::from(k) * step).to_radians();
        let vertex = Point::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
        );
        if k == 0 {
            path.move_to(vertex);
        } else {
            path.line_to(vertex);
        }
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
