// FormCheck Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessError {
    #[error("Cannot open video source: {0}")]
    SourceUnreadable(String),

    #[error("Sport '{0}' is not supported for assessment")]
    UnsupportedSport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("FFprobe error: {0}")]
    FFprobe(String),

    #[error("FFmpeg error: {0}")]
    FFmpeg(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AssessError {
    /// True for failures the surrounding UI shows verbatim. Everything else
    /// is surfaced as a generic internal error with the cause logged.
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            AssessError::SourceUnreadable(_) | AssessError::UnsupportedSport(_)
        )
    }
}

impl From<anyhow::Error> for AssessError {
    fn from(err: anyhow::Error) -> Self {
        AssessError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssessError>;
