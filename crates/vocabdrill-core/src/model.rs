//! Core data model types for vocabdrill.
//!
//! These mirror the JSON payloads exchanged with the word and validation
//! endpoints, plus the presentation-only severity banding of scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A vocabulary item served by the word endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Unique identifier, echoed back on submission.
    pub id: i64,
    /// Surface form shown to the learner.
    pub word: String,
    /// Optional definition (the service may send `null`).
    #[serde(default)]
    pub definition: Option<String>,
    /// Difficulty label. The value space belongs to the service and is not
    /// checked locally.
    pub difficulty_level: String,
}

/// Body of a sentence validation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSubmission {
    pub word_id: i64,
    /// The draft exactly as typed, untrimmed.
    pub sentence: String,
}

/// The remote evaluation of a submitted sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Score on the service's scale; rendering assumes 0–10.
    pub score: f64,
    /// Level label assigned by the service.
    pub level: String,
    pub suggestion: String,
    pub corrected_sentence: String,
}

/// Presentation classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    High,
    Medium,
    Low,
}

impl SeverityBand {
    /// Classify a score: `>= 8` is high, `>= 6` is medium, everything else
    /// (including NaN) is low.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            SeverityBand::High
        } else if score >= 6.0 {
            SeverityBand::Medium
        } else {
            SeverityBand::Low
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityBand::High => write!(f, "high"),
            SeverityBand::Medium => write!(f, "medium"),
            SeverityBand::Low => write!(f, "low"),
        }
    }
}

impl FromStr for SeverityBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(SeverityBand::High),
            "medium" => Ok(SeverityBand::Medium),
            "low" => Ok(SeverityBand::Low),
            other => Err(format!("unknown severity band: {other}")),
        }
    }
}
