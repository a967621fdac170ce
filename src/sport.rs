// Sport categories supported by the assessment pipeline

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Closed set of activity types. `Other` is accepted for storage by the
/// surrounding layer but rejected by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum SportCategory {
    #[serde(rename = "Javelin Throw")]
    JavelinThrow,
    #[serde(rename = "Table Tennis")]
    TableTennis,
    #[serde(rename = "Archery")]
    Archery,
    #[serde(rename = "Push-ups")]
    PushUps,
    #[serde(rename = "Discus Throw")]
    DiscusThrow,
    #[serde(rename = "High Jump")]
    HighJump,
    #[serde(rename = "Other Sports")]
    Other,
}

/// The six categories the pipeline can assess, in display order.
pub const SUPPORTED_SPORTS: [SportCategory; 6] = [
    SportCategory::JavelinThrow,
    SportCategory::TableTennis,
    SportCategory::Archery,
    SportCategory::PushUps,
    SportCategory::DiscusThrow,
    SportCategory::HighJump,
];

impl SportCategory {
    /// Human-readable label, matching the interchange form.
    pub fn label(&self) -> &'static str {
        match self {
            SportCategory::JavelinThrow => "Javelin Throw",
            SportCategory::TableTennis => "Table Tennis",
            SportCategory::Archery => "Archery",
            SportCategory::PushUps => "Push-ups",
            SportCategory::DiscusThrow => "Discus Throw",
            SportCategory::HighJump => "High Jump",
            SportCategory::Other => "Other Sports",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, SportCategory::Other)
    }
}

impl fmt::Display for SportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_set() {
        for sport in SUPPORTED_SPORTS {
            assert!(sport.is_supported());
        }
        assert!(!SportCategory::Other.is_supported());
    }

    #[test]
    fn test_label_round_trip() {
        // Labels are the interchange form; serde must round-trip them
        for sport in [
            SportCategory::JavelinThrow,
            SportCategory::PushUps,
            SportCategory::Other,
        ] {
            let json = serde_json::to_string(&sport).unwrap();
            assert_eq!(json, format!("\"{}\"", sport.label()));
            let back: SportCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, sport);
        }
    }
}
