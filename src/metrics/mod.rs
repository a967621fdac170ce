// Metric extraction
// One generic extractor driven by a per-sport schema table, so the six
// sports cannot drift apart structurally. Key names and record shape are
// the interchange contract consumed by the rating engine and the caller's
// persistence layer; the values are placeholder signals until a real model
// replaces the stub source.

use std::collections::BTreeMap;

use crate::constants::{
    COVERAGE_DECIMALS, M_AVG_WRIST_SPEED, M_HIP_ROTATION_RANGE, M_HIP_VERTICAL_DISPLACEMENT,
    M_MAX_DRAW_RATIO, M_MAX_WRIST_SPEED, M_PEAK_WRIST_SPEED, M_POSE_COVERAGE, M_PUSHUP_DEPTH,
    M_PUSHUP_REPS, M_RALLY_COUNT, M_RELEASE_ANGLE, M_TAKEOFF_ANGLE,
};
use crate::pose::{PoseDetection, SignalSource};
use crate::sport::SportCategory;
use crate::video::Frame;

/// Flat metric name -> value mapping. BTreeMap keeps the serialized key
/// order stable across invocations.
pub type MetricRecord = BTreeMap<String, f64>;

/// Placeholder signal policy for one metric.
#[derive(Debug, Clone, Copy)]
pub enum Signal {
    /// Continuous value in [lo, hi), rounded to `decimals`.
    Uniform { lo: f64, hi: f64, decimals: i32 },
    /// Integer value in [lo, hi), stored as a whole-valued float.
    Count { lo: u64, hi: u64 },
}

#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    pub key: &'static str,
    pub signal: Signal,
}

const JAVELIN_METRICS: &[MetricSpec] = &[
    MetricSpec {
        key: M_RELEASE_ANGLE,
        signal: Signal::Uniform { lo: 25.0, hi: 40.0, decimals: 1 },
    },
    MetricSpec {
        key: M_MAX_WRIST_SPEED,
        signal: Signal::Uniform { lo: 5.0, hi: 20.0, decimals: 1 },
    },
];

const TABLE_TENNIS_METRICS: &[MetricSpec] = &[
    MetricSpec {
        key: M_RALLY_COUNT,
        signal: Signal::Count { lo: 1, hi: 10 },
    },
    MetricSpec {
        key: M_AVG_WRIST_SPEED,
        signal: Signal::Uniform { lo: 2.0, hi: 8.0, decimals: 1 },
    },
    MetricSpec {
        key: M_PEAK_WRIST_SPEED,
        signal: Signal::Uniform { lo: 8.0, hi: 15.0, decimals: 1 },
    },
];

const ARCHERY_METRICS: &[MetricSpec] = &[MetricSpec {
    key: M_MAX_DRAW_RATIO,
    signal: Signal::Uniform { lo: 0.8, hi: 1.4, decimals: 2 },
}];

const PUSHUP_METRICS: &[MetricSpec] = &[
    MetricSpec {
        key: M_PUSHUP_REPS,
        signal: Signal::Count { lo: 5, hi: 20 },
    },
    MetricSpec {
        key: M_PUSHUP_DEPTH,
        signal: Signal::Uniform { lo: 0.3, hi: 0.9, decimals: 2 },
    },
];

const DISCUS_METRICS: &[MetricSpec] = &[
    MetricSpec {
        key: M_MAX_WRIST_SPEED,
        signal: Signal::Uniform { lo: 5.0, hi: 15.0, decimals: 1 },
    },
    MetricSpec {
        key: M_HIP_ROTATION_RANGE,
        signal: Signal::Uniform { lo: 30.0, hi: 60.0, decimals: 1 },
    },
];

const HIGH_JUMP_METRICS: &[MetricSpec] = &[
    MetricSpec {
        key: M_HIP_VERTICAL_DISPLACEMENT,
        signal: Signal::Uniform { lo: 40.0, hi: 80.0, decimals: 1 },
    },
    MetricSpec {
        key: M_TAKEOFF_ANGLE,
        signal: Signal::Uniform { lo: 65.0, hi: 85.0, decimals: 1 },
    },
];

/// Sport-specific metric schema. Empty for `Other`, which the orchestrator
/// rejects before extraction.
pub fn schema(sport: SportCategory) -> &'static [MetricSpec] {
    match sport {
        SportCategory::JavelinThrow => JAVELIN_METRICS,
        SportCategory::TableTennis => TABLE_TENNIS_METRICS,
        SportCategory::Archery => ARCHERY_METRICS,
        SportCategory::PushUps => PUSHUP_METRICS,
        SportCategory::DiscusThrow => DISCUS_METRICS,
        SportCategory::HighJump => HIGH_JUMP_METRICS,
        SportCategory::Other => &[],
    }
}

/// Fraction of detections that are present, rounded to 3 decimals.
pub fn pose_coverage(detections: &[PoseDetection]) -> f64 {
    let present = detections.iter().filter(|d| d.is_present()).count();
    let total = detections.len().max(1);
    round_to(present as f64 / total as f64, COVERAGE_DECIMALS)
}

/// Build the metric record for a sport from the pose detections.
///
/// `frames` is part of the extractor contract: a model-backed source would
/// derive signals from keypoint trajectories across them. The stub draws
/// from the signal source instead.
pub fn extract(
    sport: SportCategory,
    detections: &[PoseDetection],
    _frames: &[Frame],
    source: &mut dyn SignalSource,
) -> MetricRecord {
    let mut record = MetricRecord::new();
    record.insert(M_POSE_COVERAGE.to_string(), pose_coverage(detections));

    for spec in schema(sport) {
        let value = match spec.signal {
            Signal::Uniform { lo, hi, decimals } => round_to(source.uniform(lo, hi), decimals),
            Signal::Count { lo, hi } => source.uniform_count(lo, hi) as f64,
        };
        record.insert(spec.key.to_string(), value);
    }

    record
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Keypoint, RandomStub};
    use crate::sport::SUPPORTED_SPORTS;

    fn detections(present: usize, absent: usize) -> Vec<PoseDetection> {
        let mut out = vec![PoseDetection::Present(vec![Keypoint { x: 1.0, y: 1.0 }]); present];
        out.extend(std::iter::repeat(PoseDetection::Absent).take(absent));
        out
    }

    #[test]
    fn test_coverage_exact_fraction() {
        assert_eq!(pose_coverage(&detections(3, 1)), 0.75);
        assert_eq!(pose_coverage(&detections(0, 8)), 0.0);
        assert_eq!(pose_coverage(&detections(8, 0)), 1.0);
    }

    #[test]
    fn test_coverage_empty_sequence() {
        // max(1, total) guard: no detections still yields a valid ratio
        assert_eq!(pose_coverage(&[]), 0.0);
    }

    #[test]
    fn test_coverage_rounded_to_three_decimals() {
        // 1/3 = 0.333...
        let coverage = pose_coverage(&detections(1, 2));
        assert_eq!(coverage, 0.333);
    }

    #[test]
    fn test_record_shape_is_stable_per_sport() {
        for sport in SUPPORTED_SPORTS {
            let mut a = RandomStub::with_seed(0.8, 1);
            let mut b = RandomStub::with_seed(0.8, 2);

            let first = extract(sport, &detections(4, 4), &[], &mut a);
            let second = extract(sport, &detections(2, 0), &[], &mut b);

            let keys_a: Vec<&String> = first.keys().collect();
            let keys_b: Vec<&String> = second.keys().collect();
            assert_eq!(keys_a, keys_b, "key set varies for {}", sport);
            assert!(first.contains_key(M_POSE_COVERAGE));
        }
    }

    #[test]
    fn test_values_within_schema_ranges() {
        for sport in SUPPORTED_SPORTS {
            let mut source = RandomStub::with_seed(0.8, 42);
            let record = extract(sport, &detections(5, 3), &[], &mut source);

            for spec in schema(sport) {
                let value = record[spec.key];
                match spec.signal {
                    Signal::Uniform { lo, hi, .. } => {
                        // Rounding can nudge a draw just past the bound
                        assert!(value >= lo - 0.05 && value <= hi + 0.05);
                    }
                    Signal::Count { lo, hi } => {
                        assert!(value >= lo as f64 && value < hi as f64);
                        assert_eq!(value.fract(), 0.0, "count metric must be whole-valued");
                    }
                }
            }
        }
    }

    #[test]
    fn test_json_round_trip() {
        let mut source = RandomStub::with_seed(0.8, 7);
        let record = extract(SportCategory::TableTennis, &detections(6, 2), &[], &mut source);

        let json = serde_json::to_string(&record).unwrap();
        let back: MetricRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            back.keys().collect::<Vec<_>>()
        );
        for (key, value) in &record {
            assert!((value - back[key]).abs() < 1e-6, "{} drifted", key);
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.33333, 3), 0.333);
        assert_eq!(round_to(7.25, 1), 7.3);
        assert_eq!(round_to(1.005, 2), 1.0); // binary representation rounds down
    }
}
