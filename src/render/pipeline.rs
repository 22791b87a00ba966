use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::compile::plan::compile_frame;
use crate::composition::model::AnimationConfig;
use crate::encode::png::{frame_file_name, write_frame_png};
use crate::eval::plan::plan_frame;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LogomotiveError, LogomotiveResult};
use crate::render::backend::{BackendKind, FrameRgba, RenderBackend, create_backend};
use crate::render::cpu::CpuBackend;

#[derive(Clone, Debug, Default)]
/// Threading controls for multi-frame composition.
pub struct RenderThreading {
    /// Enable parallel composition when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated counters for a sequence render.
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames that were rendered.
    pub frames_rendered: u64,
}

/// Evaluate + compile + render a single frame against a caller-supplied backend.
///
/// Pipeline:
/// 1. [`plan_frame`](crate::plan_frame)
/// 2. [`compile_frame`](crate::compile_frame)
/// 3. [`RenderBackend::render_plan`](crate::RenderBackend::render_plan)
///
/// Returns a [`FrameRgba`] containing **premultiplied** RGBA8 pixels.
pub fn compose_frame_with(
    config: &AnimationConfig,
    frame: FrameIndex,
    backend: &mut dyn RenderBackend,
) -> LogomotiveResult<FrameRgba> {
    let shape = plan_frame(config, frame)?;
    let plan = compile_frame(config, &shape);
    backend.render_plan(&plan)
}

/// Evaluate + compile + render a single frame on a fresh CPU backend.
///
/// This is the primary "one-shot" API for producing pixels from an
/// [`AnimationConfig`]: a pure function of its inputs, with no state carried
/// between calls.
pub fn compose_frame(config: &AnimationConfig, frame: FrameIndex) -> LogomotiveResult<FrameRgba> {
    let mut backend = create_backend(BackendKind::Cpu);
    compose_frame_with(config, frame, backend.as_mut())
}

/// Compose every frame of the sequence, in index order.
///
/// Frames are mutually independent pure computations, so with
/// `threading.parallel` the range is mapped across a rayon pool with no
/// coordination; output order is index order either way.
pub fn compose_frames(
    config: &AnimationConfig,
    threading: &RenderThreading,
) -> LogomotiveResult<Vec<FrameRgba>> {
    config.validate()?;
    let range = config.frame_range();

    if !threading.parallel {
        let mut backend = CpuBackend::new();
        let mut out = Vec::with_capacity(range.len_frames() as usize);
        for f in range.start.0..range.end.0 {
            out.push(compose_frame_with(config, FrameIndex(f), &mut backend)?);
        }
        return Ok(out);
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| compose_frame(config, FrameIndex(f)))
            .collect()
    })
}

/// Compose every frame and write it as `frame-<index>.png` under `out_dir`.
///
/// The directory is created if missing. Returns the written paths in frame
/// order along with rendering stats.
pub fn render_to_png_sequence_with_stats(
    config: &AnimationConfig,
    out_dir: &Path,
    threading: &RenderThreading,
) -> LogomotiveResult<(Vec<PathBuf>, RenderStats)> {
    let frames = compose_frames(config, threading)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let mut paths = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().enumerate() {
        let index = FrameIndex(i as u64 + 1);
        let path = out_dir.join(frame_file_name(index));
        write_frame_png(frame, &path)?;
        tracing::info!(frame = index.0, path = %path.display(), "wrote frame");
        paths.push(path);
    }

    let stats = RenderStats {
        frames_total: frames.len() as u64,
        frames_rendered: frames.len() as u64,
    };
    Ok((paths, stats))
}

/// Compose every frame and write the PNG sequence under `out_dir`.
///
/// This is a convenience wrapper around
/// [`render_to_png_sequence_with_stats`].
pub fn render_to_png_sequence(
    config: &AnimationConfig,
    out_dir: &Path,
    threading: &RenderThreading,
) -> LogomotiveResult<Vec<PathBuf>> {
    render_to_png_sequence_with_stats(config, out_dir, threading).map(|(paths, _)| paths)
}

fn build_thread_pool(threads: Option<usize>) -> LogomotiveResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(LogomotiveError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| LogomotiveError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
