// FormCheck Constants
// Pipeline defaults and per-sport rating thresholds. Metric key names are
// part of the interchange contract with the persistence/display layer.

pub const PIPELINE_VERSION: u32 = 1;

// Frame sampling
pub const DEFAULT_SAMPLE_FRAMES: usize = 8;

// Pose estimation stub
pub const DEFAULT_DETECTION_PROBABILITY: f64 = 0.8;
pub const KEYPOINTS_PER_POSE: usize = 10;

// Rounding
pub const COVERAGE_DECIMALS: i32 = 3;
pub const RATING_DECIMALS: i32 = 1;

// ----- Metric Keys -----
// Stable tokens consumed by the rating engine and external layers.
// Format: M_<SPORT_OR_COMMON>_<SIGNAL>

pub const M_POSE_COVERAGE: &str = "pose_coverage_ratio";

pub const M_RELEASE_ANGLE: &str = "release_angle_deg";
pub const M_MAX_WRIST_SPEED: &str = "max_wrist_speed_px_per_frame";

pub const M_RALLY_COUNT: &str = "rally_count";
pub const M_AVG_WRIST_SPEED: &str = "avg_wrist_speed_px";
pub const M_PEAK_WRIST_SPEED: &str = "peak_wrist_speed_px";

pub const M_MAX_DRAW_RATIO: &str = "max_draw_ratio";

pub const M_PUSHUP_REPS: &str = "pushup_reps";
pub const M_PUSHUP_DEPTH: &str = "pushup_depth";

pub const M_HIP_ROTATION_RANGE: &str = "hip_rotation_range_px";

pub const M_HIP_VERTICAL_DISPLACEMENT: &str = "hip_vertical_displacement";
pub const M_TAKEOFF_ANGLE: &str = "takeoff_angle_deg";

// ----- Rating Thresholds -----
// Inclusive range bounds and caps used by the rating formulas.

// Javelin throw
pub const JAVELIN_RELEASE_ANGLE_MIN: f64 = 30.0;
pub const JAVELIN_RELEASE_ANGLE_MAX: f64 = 36.0;

// Table tennis
pub const TT_RALLY_DIVISOR: f64 = 2.0;
pub const TT_RALLY_CAP: f64 = 4.0;
pub const TT_PEAK_TO_AVG_FACTOR: f64 = 1.5;

// Archery
pub const ARCHERY_DRAW_RATIO_MIN: f64 = 0.9;
pub const ARCHERY_DRAW_RATIO_MAX: f64 = 1.3;

// Push-ups
pub const PUSHUP_REP_POINTS: f64 = 0.5;
pub const PUSHUP_REP_CAP: f64 = 6.0;
pub const PUSHUP_DEPTH_MIN: f64 = 0.5;

// High jump
pub const HIGHJUMP_DISPLACEMENT_DIVISOR: f64 = 50.0;
pub const HIGHJUMP_DISPLACEMENT_CAP: f64 = 6.0;
pub const HIGHJUMP_TAKEOFF_ANGLE_MIN: f64 = 70.0;
pub const HIGHJUMP_TAKEOFF_ANGLE_MAX: f64 = 80.0;

// ----- Upload Layer Contract -----
// Enforced by the surrounding upload/CLI layer before the pipeline runs,
// never by the pipeline itself.

pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "mkv"];
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;
