//! # Logomotive guide
//!
//! This module is a standalone walkthrough of Logomotive's architecture and
//! public API, so integrations can build on a shared mental model of what
//! "a frame" means in this codebase.
//!
//! If you are looking for copy/paste commands, start with the repository
//! `README.md`. If you are extending the animation, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`AnimationConfig`](crate::AnimationConfig): the immutable constants of
//!   the animation (canvas size, colors, frame count)
//! - [`FrameIndex`](crate::FrameIndex): a 1-based index into the sequence
//! - [`ShapePlan`](crate::ShapePlan): the geometry parameters derived for one
//!   frame (radius, rotation, ring/dot visibility)
//! - [`FramePlan`](crate::FramePlan): backend-agnostic draw operations for a
//!   single frame
//! - [`RenderBackend`](crate::RenderBackend): executes a plan into pixels
//! - [`FrameRgba`](crate::FrameRgba): the output pixels (RGBA8, premultiplied
//!   alpha)
//!
//! The pipeline is explicitly staged:
//!
//! 1. Evaluate geometry: [`plan_frame`](crate::plan_frame)
//! 2. Compile into draw ops: [`compile_frame`](crate::compile_frame)
//! 3. Execute ops: [`RenderBackend::render_plan`](crate::RenderBackend::render_plan)
//!
//! Convenience wrappers for steps (1)+(2)+(3) live in:
//! - [`compose_frame`](crate::compose_frame)
//! - [`compose_frames`](crate::compose_frames)
//! - [`render_to_png_sequence`](crate::render_to_png_sequence)
//!
//! ---
//!
//! ## The animation
//!
//! Every frame is a pure function of `(AnimationConfig, FrameIndex)`:
//!
//! - a square outline whose circumradius grows by 10px per frame and which
//!   turns 45 degrees per frame, so the last of 8 frames completes a full
//!   revolution;
//! - from frame 3 onward, a thin ring that frames the square with a constant
//!   10px margin;
//! - on even frames, a fixed-size filled dot at the center, producing a pulse.
//!
//! Because no state is carried between frames, frame 5 can be composed before
//! frame 2 and the results are identical to composing them in order. This is
//! also what makes [`compose_frames`](crate::compose_frames) safe to
//! parallelize across a thread pool with zero coordination.
//!
//! ---
//!
//! ## "No IO outside encode" (and why)
//!
//! Evaluation, compilation and rendering never touch the filesystem, which
//! keeps them deterministic, testable and portable. The only IO lives in:
//!
//! - [`write_frame_png`](crate::write_frame_png) /
//!   [`render_to_png_sequence`](crate::render_to_png_sequence), which persist
//!   finished frames;
//! - [`AnimationConfig::from_path`](crate::AnimationConfig::from_path), which
//!   loads overrides before the pipeline starts.
//!
//! Renderers output **premultiplied** RGBA8; the PNG encoder is the single
//! place where pixels are converted back to straight alpha.
