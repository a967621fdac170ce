// FormCheck - Sport Performance Assessment Library

pub mod assess;
pub mod constants;
pub mod error;
pub mod metrics;
pub mod pose;
pub mod rating;
pub mod sport;
pub mod tools;
pub mod video;

pub use assess::{assess_video, AssessmentOptions, AssessmentResult};
pub use error::{AssessError, Result};
pub use sport::{SportCategory, SUPPORTED_SPORTS};
