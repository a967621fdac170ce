// Frame sampling
// Selects evenly spaced frame indices and decodes them in one FFmpeg pass
// to raw RGB24 buffers on stdout.

use std::path::Path;
use std::process::Command;

use anyhow::bail;

use crate::error::{AssessError, Result};
use crate::tools::ffmpeg_path;

use super::probe::{self, VideoInfo};
use super::Frame;

/// Select up to `target` indices evenly spaced across [0, total_frames-1].
/// Every frame is selected when the video is shorter than the target.
pub fn sample_indices(total_frames: u64, target: usize) -> Vec<u64> {
    if total_frames == 0 || target == 0 {
        return Vec::new();
    }
    if total_frames <= target as u64 {
        return (0..total_frames).collect();
    }
    if target == 1 {
        return vec![0];
    }

    let step = (total_frames - 1) as f64 / (target - 1) as f64;
    (0..target).map(|i| (i as f64 * step).round() as u64).collect()
}

/// Sample `target` evenly spaced frames from a video.
///
/// Frames that fail to decode are dropped without substitution, so the
/// returned sequence may be shorter than `target`. A source whose frame
/// count cannot be determined yields an empty sequence.
pub fn sample_frames(path: &Path, target: usize) -> Result<Vec<Frame>> {
    let info = probe::probe(path)?;

    let total = match info.total_frames {
        Some(n) => n,
        None => {
            log::warn!(
                "No frame count available for {}, returning empty sequence",
                path.display()
            );
            return Ok(Vec::new());
        }
    };

    let indices = sample_indices(total, target);
    log::debug!(
        "Sampling {} of {} frames from {}",
        indices.len(),
        total,
        path.display()
    );

    decode_frames(path, &info, &indices).map_err(|e| AssessError::FFmpeg(e.to_string()))
}

/// Decode the selected frame indices to RGB24 buffers.
fn decode_frames(path: &Path, info: &VideoInfo, indices: &[u64]) -> anyhow::Result<Vec<Frame>> {
    if indices.is_empty() {
        return Ok(Vec::new());
    }

    // select expression: eq(n\,0)+eq(n\,14)+... (commas escaped for the
    // filter graph parser)
    let select_expr = indices
        .iter()
        .map(|i| format!("eq(n\\,{})", i))
        .collect::<Vec<_>>()
        .join("+");
    let filter = format!("select={}", select_expr);

    let output = Command::new(ffmpeg_path())
        .args(["-v", "error", "-i"])
        .arg(path)
        .args([
            "-vf", &filter,
            "-vsync", "0",
            "-f", "rawvideo",
            "-pix_fmt", "rgb24",
            "-",
        ])
        .output()?;

    if !output.status.success() && output.stdout.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("FFmpeg decode failed: {}", stderr.trim());
    }

    if !output.status.success() {
        // Partial decode: keep what arrived, drop the rest
        log::warn!(
            "FFmpeg exited with errors for {}, keeping {} decoded bytes",
            path.display(),
            output.stdout.len()
        );
    }

    let frame_size = (info.width * info.height * 3) as usize;
    let chunks = output.stdout.chunks_exact(frame_size);

    if !chunks.remainder().is_empty() {
        log::warn!(
            "Dropping {} trailing bytes of partial frame from {}",
            chunks.remainder().len(),
            path.display()
        );
    }

    let frames = chunks
        .enumerate()
        .map(|(index, data)| Frame {
            index,
            width: info.width,
            height: info.height,
            data: data.to_vec(),
        })
        .collect();

    Ok(frames)
}
