//! Per user, per question spaced repetition state.

use super::{DueTag, QuestionStatus};
use crate::error::{RecallError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EASE_FACTOR: f64 = 2.5;
/// Ease factor never drops below this, however many lapses occur.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Review progress of one question. `next_review_at == None` means the
/// question has never been scheduled and is due now.
///
/// Fields are private: every state is built through [`ReviewState::new`],
/// [`ReviewState::restore`] or deserialization, all of which keep the ease
/// factor finite and at or above [`MIN_EASE_FACTOR`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReviewRecord", rename_all = "camelCase")]
pub struct ReviewState {
    ease_factor: f64,
    interval_days: u32,
    repetitions: u32,
    next_review_at: Option<DateTime<Utc>>,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            ease_factor: DEFAULT_EASE_FACTOR,
            interval_days: 0,
            repetitions: 0,
            next_review_at: None,
        }
    }
}

impl ReviewState {
    /// Builds a state, clamping an ease factor below the floor up to it.
    /// A non-finite ease factor is rejected.
    pub fn new(
        ease_factor: f64,
        interval_days: u32,
        repetitions: u32,
        next_review_at: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        Ok(Self {
            ease_factor: normalize_ease(ease_factor)?,
            interval_days,
            repetitions,
            next_review_at,
        })
    }

    /// A never-practiced state. `ease_factor` must already be validated,
    /// as `SchedulerConfig::validate` does for the initial ease.
    pub(crate) fn with_ease(ease_factor: f64) -> Self {
        Self {
            ease_factor: ease_factor.max(MIN_EASE_FACTOR),
            ..Self::default()
        }
    }

    /// Rebuilds a state from stored values.
    ///
    /// An ease factor below the floor is clamped up to it; a non-finite ease
    /// or negative counters are rejected as corrupted data.
    pub fn restore(
        ease_factor: f64,
        interval_days: i64,
        repetitions: i64,
        next_review_at: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        Self::new(
            ease_factor,
            counter("intervalDays", interval_days)?,
            counter("repetitions", repetitions)?,
            next_review_at,
        )
    }

    pub fn ease_factor(&self) -> f64 {
        self.ease_factor
    }

    pub fn interval_days(&self) -> u32 {
        self.interval_days
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    pub fn next_review_at(&self) -> Option<DateTime<Utc>> {
        self.next_review_at
    }

    pub fn status(&self) -> QuestionStatus {
        QuestionStatus::from_repetitions(self.repetitions)
    }

    pub fn due_tag(&self, now: DateTime<Utc>) -> DueTag {
        DueTag::classify(self.next_review_at, now)
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_tag(now).is_due()
    }
}

/// Clamps an ease factor to the floor; rejects NaN and infinities.
fn normalize_ease(ease_factor: f64) -> Result<f64> {
    if !ease_factor.is_finite() {
        return Err(RecallError::InvalidState {
            field: "easeFactor",
            value: ease_factor.to_string(),
        });
    }
    if ease_factor < MIN_EASE_FACTOR {
        log::warn!(
            "Ease factor {} below minimum, clamping to {}",
            ease_factor,
            MIN_EASE_FACTOR
        );
        return Ok(MIN_EASE_FACTOR);
    }
    Ok(ease_factor)
}

fn counter(field: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| RecallError::InvalidState {
        field,
        value: value.to_string(),
    })
}

/// Review state as storage hands it over: every column may be missing and
/// counters are signed.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewRecord {
    pub ease_factor: Option<f64>,
    pub interval_days: Option<i64>,
    pub repetitions: Option<i64>,
    pub next_review_at: Option<DateTime<Utc>>,
}

impl TryFrom<ReviewRecord> for ReviewState {
    type Error = RecallError;

    fn try_from(record: ReviewRecord) -> Result<Self> {
        ReviewState::restore(
            record.ease_factor.unwrap_or(DEFAULT_EASE_FACTOR),
            record.interval_days.unwrap_or(0),
            record.repetitions.unwrap_or(0),
            record.next_review_at,
        )
    }
}
