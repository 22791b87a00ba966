/// Convenience result type used across Logomotive.
pub type LogomotiveResult<T> = Result<T, LogomotiveError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LogomotiveError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Frame index outside the configured sequence `[1, total]`.
    ///
    /// Out-of-range indices are rejected before any drawing work; they are
    /// never clamped or extrapolated.
    #[error("invalid frame index {frame}: expected 1..={total}")]
    InvalidFrameIndex {
        /// The rejected frame index.
        frame: u64,
        /// Total frame count of the sequence.
        total: u64,
    },

    /// Errors while rasterizing a frame plan (surface allocation, readback).
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or persisting frame images.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogomotiveError {
    /// Build a [`LogomotiveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LogomotiveError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LogomotiveError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LogomotiveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
