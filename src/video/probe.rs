// FFprobe wrapper for video stream info

use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use crate::error::{AssessError, Result};
use crate::tools::ffprobe_path;

#[derive(Debug, Deserialize)]
struct FFprobeOutput {
    streams: Option<Vec<FFprobeStream>>,
    format: Option<FFprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FFprobeStream {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    nb_frames: Option<String>,
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FFprobeFormat {
    duration: Option<String>,
}

/// Stream info for the first video stream of a container.
#[derive(Debug, Clone)]
pub struct VideoInfo {
    pub width: u32,
    pub height: u32,
    /// Container-reported count, or an estimate from duration and fps.
    /// None when neither is available.
    pub total_frames: Option<u64>,
    pub fps: Option<f64>,
    pub duration_ms: Option<i64>,
}

/// Probe a video file. Fails with `SourceUnreadable` when the container
/// cannot be opened or carries no video stream.
pub fn probe(path: &Path) -> Result<VideoInfo> {
    let output = Command::new(ffprobe_path())
        .args([
            "-v", "quiet",
            "-print_format", "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| AssessError::FFprobe(format!("Failed to run ffprobe: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AssessError::SourceUnreadable(format!(
            "{}: {}",
            path.display(),
            stderr.trim()
        )));
    }

    let probe_output: FFprobeOutput = serde_json::from_slice(&output.stdout)
        .map_err(|e| AssessError::FFprobe(format!("Failed to parse ffprobe output: {}", e)))?;

    let streams = probe_output.streams.unwrap_or_default();
    let video = streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| {
            AssessError::SourceUnreadable(format!("{}: no video stream", path.display()))
        })?;

    let (width, height) = match (video.width, video.height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(AssessError::SourceUnreadable(format!(
                "{}: video stream has no dimensions",
                path.display()
            )))
        }
    };

    let fps = parse_frame_rate(video.r_frame_rate.as_deref());

    let duration_ms = parse_duration_ms(video.duration.as_deref()).or_else(|| {
        probe_output
            .format
            .as_ref()
            .and_then(|f| parse_duration_ms(f.duration.as_deref()))
    });

    // Prefer the container-reported frame count, estimate otherwise
    let total_frames = video
        .nb_frames
        .as_ref()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|&n| n > 0)
        .or_else(|| estimate_frame_count(fps, duration_ms));

    Ok(VideoInfo {
        width,
        height,
        total_frames,
        fps,
        duration_ms,
    })
}

fn estimate_frame_count(fps: Option<f64>, duration_ms: Option<i64>) -> Option<u64> {
    let fps = fps?;
    let duration_ms = duration_ms?;
    if fps <= 0.0 || duration_ms <= 0 {
        return None;
    }
    let estimate = (fps * duration_ms as f64 / 1000.0).round() as u64;
    (estimate > 0).then_some(estimate)
}

/// Parse frame rate string like "30000/1001" to f64
fn parse_frame_rate(rate_str: Option<&str>) -> Option<f64> {
    let rate_str = rate_str?;
    if let Some((num, den)) = rate_str.split_once('/') {
        let num: f64 = num.parse().ok()?;
        let den: f64 = den.parse().ok()?;
        if den > 0.0 {
            return Some(num / den);
        }
    }
    rate_str.parse().ok()
}

/// Parse duration string to milliseconds
fn parse_duration_ms(duration_str: Option<&str>) -> Option<i64> {
    let duration_str = duration_str?;
    let seconds: f64 = duration_str.parse().ok()?;
    Some((seconds * 1000.0) as i64)
}

/// Check if ffprobe is available
pub fn is_available() -> bool {
    crate::tools::is_tool_available("ffprobe")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_rate() {
        assert_eq!(parse_frame_rate(Some("30/1")), Some(30.0));
        let ntsc = parse_frame_rate(Some("30000/1001")).unwrap();
        assert!((ntsc - 29.97).abs() < 0.01);
        assert_eq!(parse_frame_rate(Some("0/0")), None);
        assert_eq!(parse_frame_rate(None), None);
    }

    #[test]
    fn test_parse_duration_ms() {
        assert_eq!(parse_duration_ms(Some("5.0")), Some(5000));
        assert_eq!(parse_duration_ms(Some("0.5")), Some(500));
        assert_eq!(parse_duration_ms(Some("garbage")), None);
    }

    #[test]
    fn test_estimate_frame_count() {
        assert_eq!(estimate_frame_count(Some(30.0), Some(5000)), Some(150));
        assert_eq!(estimate_frame_count(Some(0.0), Some(5000)), None);
        assert_eq!(estimate_frame_count(None, Some(5000)), None);
        assert_eq!(estimate_frame_count(Some(30.0), None), None);
    }

    #[test]
    fn test_probe_missing_file() {
        if !is_available() {
            eprintln!("Skipping test - ffprobe not available");
            return;
        }
        let err = probe(Path::new("/nonexistent/clip.mp4")).unwrap_err();
        assert!(matches!(err, AssessError::SourceUnreadable(_)));
    }
}
