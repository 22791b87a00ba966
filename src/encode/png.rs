use std::path::Path;

use anyhow::Context;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LogomotiveError, LogomotiveResult};
use crate::render::backend::FrameRgba;

/// File name for a frame in the output sequence: `frame-<index>.png`.
///
/// The index is 1-based and not zero-padded.
pub fn frame_file_name(frame: FrameIndex) -> String {
    format!("frame-{}.png", frame.0)
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> LogomotiveResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode a frame as a lossless RGBA PNG at `path`.
///
/// Premultiplied frame data is converted back to straight alpha before
/// encoding; frames already in straight alpha are written as-is.
pub fn write_frame_png(frame: &FrameRgba, path: &Path) -> LogomotiveResult<()> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(LogomotiveError::encode(format!(
            "frame byte len {} does not match {}x{} rgba8",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }

    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| LogomotiveError::encode(format!("write png '{}': {e}", path.display())))
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
