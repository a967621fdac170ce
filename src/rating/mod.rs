// Rating engine
// Deterministic per-sport additive formulas over a metric record. Range
// checks are inclusive on both ends; a missing key contributes 0 to its
// term. Scores are rounded to 1 decimal and carry no upper clamp (the
// per-sport theoretical maximum is 10.0, but sports are not normalized to
// a common scale).

use crate::constants::{
    ARCHERY_DRAW_RATIO_MAX, ARCHERY_DRAW_RATIO_MIN, HIGHJUMP_DISPLACEMENT_CAP,
    HIGHJUMP_DISPLACEMENT_DIVISOR, HIGHJUMP_TAKEOFF_ANGLE_MAX, HIGHJUMP_TAKEOFF_ANGLE_MIN,
    JAVELIN_RELEASE_ANGLE_MAX, JAVELIN_RELEASE_ANGLE_MIN, M_AVG_WRIST_SPEED,
    M_HIP_ROTATION_RANGE, M_HIP_VERTICAL_DISPLACEMENT, M_MAX_DRAW_RATIO, M_MAX_WRIST_SPEED,
    M_PEAK_WRIST_SPEED, M_POSE_COVERAGE, M_PUSHUP_DEPTH, M_PUSHUP_REPS, M_RALLY_COUNT,
    M_RELEASE_ANGLE, M_TAKEOFF_ANGLE, PUSHUP_DEPTH_MIN, PUSHUP_REP_CAP, PUSHUP_REP_POINTS,
    RATING_DECIMALS, TT_PEAK_TO_AVG_FACTOR, TT_RALLY_CAP, TT_RALLY_DIVISOR,
};
use crate::metrics::{round_to, MetricRecord};
use crate::sport::SportCategory;

/// Compute the rating for a sport from its metric record.
pub fn rate(sport: SportCategory, metrics: &MetricRecord) -> f64 {
    let coverage = metric(metrics, M_POSE_COVERAGE).unwrap_or(0.0);

    let score = match sport {
        SportCategory::JavelinThrow => {
            let mut score = 0.0;
            if in_range(metrics, M_RELEASE_ANGLE, JAVELIN_RELEASE_ANGLE_MIN, JAVELIN_RELEASE_ANGLE_MAX) {
                score += 4.0;
            }
            if present(metrics, M_MAX_WRIST_SPEED) {
                score += 3.0;
            }
            score + 3.0 * coverage
        }

        SportCategory::TableTennis => {
            let rally = metric(metrics, M_RALLY_COUNT).unwrap_or(0.0);
            let mut score = (rally / TT_RALLY_DIVISOR).min(TT_RALLY_CAP);
            if let (Some(peak), Some(avg)) = (
                metric(metrics, M_PEAK_WRIST_SPEED),
                metric(metrics, M_AVG_WRIST_SPEED),
            ) {
                if peak > avg * TT_PEAK_TO_AVG_FACTOR {
                    score += 2.0;
                }
            }
            score + 4.0 * coverage
        }

        SportCategory::Archery => {
            let mut score = 0.0;
            if in_range(metrics, M_MAX_DRAW_RATIO, ARCHERY_DRAW_RATIO_MIN, ARCHERY_DRAW_RATIO_MAX) {
                score += 5.0;
            }
            score + 5.0 * coverage
        }

        SportCategory::PushUps => {
            let reps = metric(metrics, M_PUSHUP_REPS).unwrap_or(0.0);
            let mut score = (reps * PUSHUP_REP_POINTS).min(PUSHUP_REP_CAP);
            if metric(metrics, M_PUSHUP_DEPTH).is_some_and(|d| d > PUSHUP_DEPTH_MIN) {
                score += 2.0;
            }
            score + 2.0 * coverage
        }

        SportCategory::DiscusThrow => {
            let mut score = 0.0;
            if present(metrics, M_MAX_WRIST_SPEED) {
                score += 5.0;
            }
            if present(metrics, M_HIP_ROTATION_RANGE) {
                score += 3.0;
            }
            score + 2.0 * coverage
        }

        SportCategory::HighJump => {
            let displacement = metric(metrics, M_HIP_VERTICAL_DISPLACEMENT).unwrap_or(0.0);
            let mut score =
                (displacement / HIGHJUMP_DISPLACEMENT_DIVISOR).min(HIGHJUMP_DISPLACEMENT_CAP);
            if in_range(metrics, M_TAKEOFF_ANGLE, HIGHJUMP_TAKEOFF_ANGLE_MIN, HIGHJUMP_TAKEOFF_ANGLE_MAX) {
                score += 3.0;
            }
            score + 1.0 * coverage
        }

        // The orchestrator rejects Other before rating
        SportCategory::Other => 0.0,
    };

    round_to(score.max(0.0), RATING_DECIMALS)
}

/// Metric lookup: present means the key exists with a finite value.
fn metric(metrics: &MetricRecord, key: &str) -> Option<f64> {
    metrics.get(key).copied().filter(|v| v.is_finite())
}

fn present(metrics: &MetricRecord, key: &str) -> bool {
    metric(metrics, key).is_some()
}

/// Inclusive range check on both ends; false when the key is missing.
fn in_range(metrics: &MetricRecord, key: &str, lo: f64, hi: f64) -> bool {
    metric(metrics, key).is_some_and(|v| v >= lo && v <= hi)
}
