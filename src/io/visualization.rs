//! Animated GIF and per-frame SVG export for drawing animations

use crate::algorithm::animation::AnimationFrame;
use crate::io::error::{KolamError, Result, file_system_error};
use crate::io::image::rasterize;
use crate::io::svg::write_svg;
use image::{Delay, Frame};
use std::path::{Path, PathBuf};
use tracing::info;

/// Rasterize animation frames into GIF frames
///
/// The last frame is repeated once more, held `final_hold` times longer.
///
/// # Errors
///
/// Returns an error if there are no frames or a frame has no area
pub fn gif_frames(frames: &[AnimationFrame], delay_ms: u32, final_hold: u32) -> Result<Vec<Frame>> {
    if frames.is_empty() {
        return Err(KolamError::EmptyDrawing {
            operation: "encode animation",
        });
    }

    let mut encoded = frames
        .iter()
        .map(|frame| {
            rasterize(&frame.drawing).map(|image| {
                Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Final frame displays longer
    if let Some(last_image) = encoded.last().map(|frame| frame.buffer().clone()) {
        encoded.push(Frame::from_parts(
            last_image,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms.saturating_mul(final_hold), 1),
        ));
    }

    Ok(encoded)
}

/// Export animation frames as an animated GIF
///
/// # Errors
///
/// Returns an error if:
/// - No frames were supplied
/// - File system operations fail
/// - GIF encoding fails
pub fn export_gif(
    frames: &[AnimationFrame],
    output_path: &Path,
    delay_ms: u32,
    final_hold: u32,
) -> Result<()> {
    let encoded = gif_frames(frames, delay_ms, final_hold)?;

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)
            .map_err(|source| file_system_error(parent, "create directory", source))?;
    }

    let file = std::fs::File::create(output_path)
        .map_err(|source| file_system_error(output_path, "create file", source))?;

    let mut gif_encoder = image::codecs::gif::GifEncoder::new(file);
    gif_encoder
        .encode_frames(encoded)
        .map_err(|source| KolamError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;

    info!(path = %output_path.display(), frames = frames.len(), "gif written");
    Ok(())
}

/// Path of one frame's SVG inside `directory`, numbered from zero
pub fn frame_path(directory: &Path, index: usize) -> PathBuf {
    directory.join(format!("frame_{index:04}.svg"))
}

/// Write every frame as its own SVG file and return the paths in frame order
///
/// # Errors
///
/// Returns an error if the directory or a frame file cannot be written
pub fn export_frame_svgs(frames: &[AnimationFrame], directory: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(directory)
        .map_err(|source| file_system_error(directory, "create directory", source))?;

    frames
        .iter()
        .map(|frame| {
            let path = frame_path(directory, frame.index);
            write_svg(&frame.drawing, &path)?;
            Ok(path)
        })
        .collect()
}
