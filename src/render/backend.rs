use crate::compile::plan::FramePlan;
use crate::foundation::error::LogomotiveResult;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha** by default. The `premultiplied` flag is
/// included to make this explicit at API boundaries; the PNG encoder converts
/// back to straight alpha before writing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// A renderer that can execute a compiled [`FramePlan`] into a [`FrameRgba`].
///
/// Most users do not call [`RenderBackend::render_plan`] directly; prefer
/// [`crate::compose_frame`] and friends, which handle evaluation and
/// compilation. A plan either renders fully or fails for that frame; backends
/// never return a partially drawn surface.
pub trait RenderBackend {
    /// Execute a backend-agnostic [`FramePlan`] and read back the final frame.
    fn render_plan(&mut self, plan: &FramePlan) -> LogomotiveResult<FrameRgba>;
}

/// Available backend kinds.
///
/// - `Cpu` is always available.
#[derive(Clone, Copy, Debug)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    Cpu,
}

/// Create a rendering backend implementation.
pub fn create_backend(kind: BackendKind) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Cpu => Box::new(crate::render::cpu::CpuBackend::new()),
    }
}
