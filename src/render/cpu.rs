use crate::compile::plan::{DrawOp, FramePlan};
use crate::foundation::error::{LogomotiveError, LogomotiveResult};
use crate::render::backend::{FrameRgba, RenderBackend};

/// CPU raster backend powered by `vello_cpu`.
///
/// Each [`render_plan`](RenderBackend::render_plan) call allocates a fresh
/// render context and surface, so concurrent renders across frames need no
/// coordination.
#[derive(Debug, Default)]
pub struct CpuBackend;

impl CpuBackend {
    /// Create a CPU backend.
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for CpuBackend {
    fn render_plan(&mut self, plan: &FramePlan) -> LogomotiveResult<FrameRgba> {
        let width = plan.canvas.width;
        let height = plan.canvas.height;
        let w: u16 = width
            .try_into()
            .map_err(|_| LogomotiveError::render(format!("canvas width exceeds u16: {width}")))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| LogomotiveError::render(format!("canvas height exceeds u16: {height}")))?;
        if w == 0 || h == 0 {
            return Err(LogomotiveError::render("canvas dimensions must be >= 1"));
        }

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let clear = plan.clear_rgba8;
        if clear[3] != 0 {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                clear[0], clear[1], clear[2], clear[3],
            ));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }

        for op in &plan.ops {
            match op {
                DrawOp::StrokePath {
                    path,
                    color_rgba8: c,
                    width: stroke_width,
                } => {
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c[0], c[1], c[2], c[3]));
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*stroke_width));
                    ctx.stroke_path(&bezpath_to_cpu(path));
                }
                DrawOp::FillPath {
                    path,
                    color_rgba8: c,
                } => {
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c[0], c[1], c[2], c[3]));
                    ctx.fill_path(&bezpath_to_cpu(path));
                }
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRgba {
            width,
            height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

// vello_cpu bundles its own kurbo; bridge path geometry across the two.
fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
