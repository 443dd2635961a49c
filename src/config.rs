//! Tunable scheduler constants, loadable from a JSON file.

use crate::error::{RecallError, Result};
use crate::models::SelfRating;
use crate::models::review_state::MIN_EASE_FACTOR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Lowest SM-2 quality that counts as a successful recall.
pub const PASS_QUALITY: u8 = 3;

/// Maps each self rating onto the SM-2 0-5 quality scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityScale {
    pub poor: u8,
    pub fair: u8,
    pub good: u8,
    pub great: u8,
}

impl Default for QualityScale {
    fn default() -> Self {
        Self {
            poor: 2,
            fair: 3,
            good: 4,
            great: 5,
        }
    }
}

impl QualityScale {
    pub fn quality(&self, rating: SelfRating) -> u8 {
        match rating {
            SelfRating::Poor => self.poor,
            SelfRating::Fair => self.fair,
            SelfRating::Good => self.good,
            SelfRating::Great => self.great,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Ease factor given to a question practiced for the first time
    pub initial_ease_factor: f64,
    pub first_interval_days: u32,
    pub second_interval_days: u32,
    /// Interval after a `poor` rating
    pub lapse_interval_days: u32,
    pub quality: QualityScale,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            initial_ease_factor: 2.5,
            first_interval_days: 1,
            second_interval_days: 6,
            lapse_interval_days: 1,
            quality: QualityScale::default(),
        }
    }
}

impl SchedulerConfig {
    /// Checks the constants keep SM-2 semantics: ordered qualities with the
    /// pass boundary between `poor` and `fair`, and positive intervals.
    pub fn validate(&self) -> Result<()> {
        let q = &self.quality;
        if !(q.poor < q.fair && q.fair < q.good && q.good < q.great) {
            return Err(invalid(format!(
                "quality values must increase poor < fair < good < great, got {}/{}/{}/{}",
                q.poor, q.fair, q.good, q.great
            )));
        }
        if q.great > 5 {
            return Err(invalid(format!("quality values must be at most 5, got {}", q.great)));
        }
        if q.poor >= PASS_QUALITY || q.fair < PASS_QUALITY {
            return Err(invalid(format!(
                "poor must be below and fair at or above the pass quality {}",
                PASS_QUALITY
            )));
        }
        if !self.initial_ease_factor.is_finite() || self.initial_ease_factor < MIN_EASE_FACTOR {
            return Err(invalid(format!(
                "initialEaseFactor must be at least {}, got {}",
                MIN_EASE_FACTOR, self.initial_ease_factor
            )));
        }
        if self.first_interval_days == 0 || self.lapse_interval_days == 0 {
            return Err(invalid(
                "firstIntervalDays and lapseIntervalDays must be positive".to_string(),
            ));
        }
        if self.second_interval_days < self.first_interval_days {
            return Err(invalid(format!(
                "secondIntervalDays ({}) must not be shorter than firstIntervalDays ({})",
                self.second_interval_days, self.first_interval_days
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SchedulerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::info!("Loaded scheduler config from '{}'", path.display());
        Ok(config)
    }
}

fn invalid(message: String) -> RecallError {
    RecallError::InvalidConfig(message)
}
