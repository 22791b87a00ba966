//! Logomotive procedurally generates the frame sequence of an animated logo
//! ("expanding geometric build") and exports it as PNG assets.
//!
//! The pipeline turns a configuration (`AnimationConfig`) plus a frame index
//! into pixels (`FrameRgba`) in explicitly separated stages:
//!
//! 1. **Evaluate**: `AnimationConfig + FrameIndex -> ShapePlan` (which shapes
//!    exist at this frame, with what geometry parameters)
//! 2. **Compile**: `ShapePlan -> FramePlan` (backend-agnostic draw operations)
//! 3. **Render**: `FramePlan -> FrameRgba` (CPU backend)
//! 4. **Encode** (optional): write each frame as a lossless RGBA PNG
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: evaluation, compilation and rendering are
//!   pure and stable for a given input; frames carry no state between them.
//! - **No IO outside encode**: evaluators, compilers and renderers never touch
//!   the filesystem.
//! - **Premultiplied RGBA8** inside the pipeline: renderers output
//!   premultiplied pixels; the PNG encoder converts back to straight alpha.
//!
//! # Getting started
//!
//! - For end-user usage, see the repository README.
//! - For a standalone walkthrough of the API and architecture, see
//!   [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compile;
mod composition;
mod encode;
mod eval;
mod foundation;
mod render;

/// High-level, standalone documentation for Logomotive's concepts and architecture.
pub mod guide;

pub use compile::plan::{DrawOp, FramePlan, compile_frame};
pub use composition::model::AnimationConfig;
pub use encode::png::{ensure_parent_dir, frame_file_name, write_frame_png};
pub use eval::plan::{ShapePlan, plan_frame};
pub use foundation::core::{Canvas, FrameIndex, FrameRange};
pub use foundation::error::{LogomotiveError, LogomotiveResult};
pub use render::backend::{BackendKind, FrameRgba, RenderBackend, create_backend};
pub use render::cpu::CpuBackend;
pub use render::pipeline::{
    RenderStats, RenderThreading, compose_frame, compose_frame_with, compose_frames,
    render_to_png_sequence, render_to_png_sequence_with_stats,
};
