// Assessment orchestrator
// Linear pipeline: sample frames -> estimate poses -> extract metrics ->
// rate. Fails with a typed error from any step and never returns a
// partial record; persistence belongs to the caller.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DETECTION_PROBABILITY, DEFAULT_SAMPLE_FRAMES, PIPELINE_VERSION};
use crate::error::{AssessError, Result};
use crate::metrics::{self, MetricRecord};
use crate::pose::{self, RandomStub, SignalSource};
use crate::rating;
use crate::sport::SportCategory;
use crate::video::sampler;


/// Injectable pipeline configuration.
#[derive(Debug, Clone)]
pub struct AssessmentOptions {
    pub sample_frames: usize,
    pub detection_probability: f64,
    /// Fixed RNG seed for reproducible stub output.
    pub seed: Option<u64>,
}

impl Default for AssessmentOptions {
    fn default() -> Self {
        Self {
            sample_frames: DEFAULT_SAMPLE_FRAMES,
            detection_probability: DEFAULT_DETECTION_PROBABILITY,
            seed: None,
        }
    }
}

impl AssessmentOptions {
    /// Build the per-invocation signal source. Never shared between
    /// invocations.
    fn signal_source(&self) -> RandomStub {
        match self.seed {
            Some(seed) => RandomStub::with_seed(self.detection_probability, seed),
            None => RandomStub::new(self.detection_probability),
        }
    }
}

/// Result of one successful assessment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub sport: SportCategory,
    /// Stub model prediction, informational only. The user-selected sport
    /// always drives the assessment.
    pub predicted_sport: SportCategory,
    pub metrics: MetricRecord,
    pub rating: f64,
    pub processed: bool,
    pub frames_sampled: usize,
    pub pipeline_version: u32,
    pub created_at: DateTime<Utc>,
}

/// Run the full assessment pipeline for one video.
pub fn assess_video(
    video_path: &Path,
    sport: SportCategory,
    options: &AssessmentOptions,
) -> Result<AssessmentResult> {
    if !sport.is_supported() {
        return Err(AssessError::UnsupportedSport(sport.label().to_string()));
    }

    let mut source = options.signal_source();

    let frames = sampler::sample_frames(video_path, options.sample_frames).map_err(|e| {
        if e.is_user_visible() {
            e
        } else {
            log::error!("Frame sampling failed for {}: {}", video_path.display(), e);
            AssessError::Internal("video processing failed".to_string())
        }
    })?;
    log::debug!("Sampled {} frames from {}", frames.len(), video_path.display());

    let detections = pose::estimate(&frames, &mut source);
    log::debug!(
        "Pose detections: {} present of {}",
        detections.iter().filter(|d| d.is_present()).count(),
        detections.len()
    );

    let predicted_sport = source.predict_sport();

    let metrics = metrics::extract(sport, &detections, &frames, &mut source);
    let rating = rating::rate(sport, &metrics);
    log::debug!("{}: rating {:.1}", sport, rating);

    Ok(AssessmentResult {
        sport,
        predicted_sport,
        metrics,
        rating,
        processed: true,
        frames_sampled: frames.len(),
        pipeline_version: PIPELINE_VERSION,
        created_at: Utc::now(),
    })
}
