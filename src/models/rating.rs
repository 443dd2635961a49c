//! Self-assessment given by the user after revealing the answer.

use crate::error::RecallError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal recall rating. `Poor` is the only lapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfRating {
    Poor,
    Fair,
    Good,
    Great,
}

impl SelfRating {
    pub const ALL: [SelfRating; 4] = [
        SelfRating::Poor,
        SelfRating::Fair,
        SelfRating::Good,
        SelfRating::Great,
    ];

    pub fn is_lapse(self) -> bool {
        self == SelfRating::Poor
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelfRating::Poor => "poor",
            SelfRating::Fair => "fair",
            SelfRating::Good => "good",
            SelfRating::Great => "great",
        }
    }
}

impl fmt::Display for SelfRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelfRating {
    type Err = RecallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "poor" => Ok(SelfRating::Poor),
            "fair" => Ok(SelfRating::Fair),
            "good" => Ok(SelfRating::Good),
            "great" => Ok(SelfRating::Great),
            _ => Err(RecallError::InvalidRating(s.to_string())),
        }
    }
}

/// Rating buttons numbered 1-4, left to right.
impl TryFrom<i32> for SelfRating {
    type Error = RecallError;

    fn try_from(button: i32) -> Result<Self, Self::Error> {
        match button {
            1 => Ok(SelfRating::Poor),
            2 => Ok(SelfRating::Fair),
            3 => Ok(SelfRating::Good),
            4 => Ok(SelfRating::Great),
            other => Err(RecallError::InvalidRating(other.to_string())),
        }
    }
}
