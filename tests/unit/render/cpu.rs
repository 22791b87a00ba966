use super::*;
use crate::foundation::core::{Canvas, FrameIndex};
use kurbo::{BezPath, Ellipse, Rect, Shape};

fn empty_plan(width: u32, height: u32, clear: [u8; 4]) -> FramePlan {
    FramePlan {
        frame: FrameIndex(1),
        canvas: Canvas { width, height },
        clear_rgba8: clear,
        ops: Vec::new(),
    }
}

fn pixel(frame: &FrameRgba, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * frame.width + x) * 4) as usize;
    frame.data[idx..idx + 4].try_into().unwrap()
}

#[test]
fn transparent_clear_yields_all_zero_surface() {
    let mut backend = CpuBackend::new();
    let frame = backend.render_plan(&empty_plan(8, 8, [0, 0, 0, 0])).unwrap();
    assert_eq!(frame.width, 8);
    assert_eq!(frame.height, 8);
    assert_eq!(frame.data.len(), 8 * 8 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn opaque_clear_floods_the_surface() {
    let mut backend = CpuBackend::new();
    let frame = backend
        .render_plan(&empty_plan(4, 4, [5, 6, 7, 255]))
        .unwrap();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(pixel(&frame, x, y), [5, 6, 7, 255]);
        }
    }
}

#[test]
fn filled_ellipse_covers_center_and_leaves_corners_clear() {
    let mut plan = empty_plan(32, 32, [0, 0, 0, 0]);
    plan.ops.push(DrawOp::FillPath {
        path: Ellipse::from_rect(Rect::new(8.0, 8.0, 24.0, 24.0)).to_path(0.01),
        color_rgba8: [10, 20, 30, 255],
    });

    let mut backend = CpuBackend::new();
    let frame = backend.render_plan(&plan).unwrap();
    assert_eq!(pixel(&frame, 16, 16), [10, 20, 30, 255]);
    assert_eq!(pixel(&frame, 0, 0), [0, 0, 0, 0]);
    assert_eq!(pixel(&frame, 31, 31), [0, 0, 0, 0]);
}

#[test]
fn stroked_path_paints_a_centered_band() {
    let mut square = BezPath::new();
    square.move_to((9.0, 9.0));
    square.line_to((23.0, 9.0));
    square.line_to((23.0, 23.0));
    square.line_to((9.0, 23.0));
    square.close_path();

    let mut plan = empty_plan(32, 32, [0, 0, 0, 0]);
    plan.ops.push(DrawOp::StrokePath {
        path: square,
        color_rgba8: [200, 50, 25, 255],
        width: 3.0,
    });

    let mut backend = CpuBackend::new();
    let frame = backend.render_plan(&plan).unwrap();
    // Mid-edge pixels sit fully inside the 3px stroke band around y = 9.
    assert_eq!(pixel(&frame, 16, 9), [200, 50, 25, 255]);
    // The interior stays untouched.
    assert_eq!(pixel(&frame, 16, 16), [0, 0, 0, 0]);
    // So does the exterior well away from the stroke.
    assert_eq!(pixel(&frame, 16, 2), [0, 0, 0, 0]);
}

#[test]
fn later_ops_composite_over_earlier_ones() {
    let mut plan = empty_plan(16, 16, [0, 0, 0, 0]);
    for color in [[255, 0, 0, 255], [0, 255, 0, 255]] {
        plan.ops.push(DrawOp::FillPath {
            path: Ellipse::from_rect(Rect::new(2.0, 2.0, 14.0, 14.0)).to_path(0.01),
            color_rgba8: color,
        });
    }

    let mut backend = CpuBackend::new();
    let frame = backend.render_plan(&plan).unwrap();
    assert_eq!(pixel(&frame, 8, 8), [0, 255, 0, 255]);
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let mut backend = CpuBackend::new();
    let err = backend
        .render_plan(&empty_plan(70_000, 8, [0, 0, 0, 0]))
        .unwrap_err();
    assert!(matches!(err, LogomotiveError::Render(_)));
}
