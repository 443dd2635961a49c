//! SM-2 (SuperMemo 2) spaced repetition scheduling for interview questions.
//!
//! The four self ratings are mapped onto SM-2 quality grades (by default
//! poor=2, fair=3, good=4, great=5):
//! - `poor` is a lapse: repetitions reset to 0 and the question comes back tomorrow
//! - any other rating is a pass: 1 day, then 6 days, then previous interval × EF
//! - EF is adjusted after every review, lapses included, and never falls below 1.3
//!
//! Scheduling is a pure function of its inputs; `now` is always passed in.

use super::{ReviewState, SelfRating, review_state::MIN_EASE_FACTOR};
use crate::config::SchedulerConfig;
use crate::error::{RecallError, Result};
use chrono::{DateTime, Duration, Utc};

/// SM-2 scheduler with its tuning constants.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// State for a question practiced for the first time.
    pub fn initial_state(&self) -> ReviewState {
        ReviewState::with_ease(self.config.initial_ease_factor)
    }

    /// Calculates the review state after one rating.
    ///
    /// Fails only when the next review date would not fit in a timestamp.
    pub fn schedule_next_review(
        &self,
        state: &ReviewState,
        rating: SelfRating,
        now: DateTime<Utc>,
    ) -> Result<ReviewState> {
        let quality = self.config.quality.quality(rating);
        let ease_factor = next_ease_factor(state.ease_factor(), quality);

        let (interval_days, repetitions) = if rating.is_lapse() {
            (self.config.lapse_interval_days, 0)
        } else {
            let repetitions = state.repetitions().saturating_add(1);
            let interval = match repetitions {
                1 => self.config.first_interval_days,
                2 => self.config.second_interval_days,
                // float to int casts saturate, growth is otherwise unbounded
                _ => (f64::from(state.interval_days()) * ease_factor).round() as u32,
            };
            (interval, repetitions)
        };

        let next_review_at = now
            .checked_add_signed(Duration::days(i64::from(interval_days)))
            .ok_or(RecallError::DateOutOfRange {
                interval_days,
                from: now,
            })?;

        log::debug!(
            "Rated {}: EF {:.2} -> {:.2}, interval {} -> {} days, repetitions {} -> {}",
            rating,
            state.ease_factor(),
            ease_factor,
            state.interval_days(),
            interval_days,
            state.repetitions(),
            repetitions
        );

        ReviewState::new(ease_factor, interval_days, repetitions, Some(next_review_at))
    }

    /// Interval each rating would produce, for labelling rating buttons.
    pub fn preview_intervals(
        &self,
        state: &ReviewState,
        now: DateTime<Utc>,
    ) -> Result<[(SelfRating, u32); 4]> {
        let mut preview = [(SelfRating::Poor, 0); 4];
        for (slot, rating) in preview.iter_mut().zip(SelfRating::ALL) {
            *slot = (rating, self.schedule_next_review(state, rating, now)?.interval_days());
        }
        Ok(preview)
    }
}

/// EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored at 1.3
pub fn next_ease_factor(ease_factor: f64, quality: u8) -> f64 {
    let miss = 5.0 - f64::from(quality.min(5));
    (ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR)
}

/// Schedules with the default constants.
pub fn schedule_next_review(
    state: &ReviewState,
    rating: SelfRating,
    now: DateTime<Utc>,
) -> Result<ReviewState> {
    Scheduler::default().schedule_next_review(state, rating, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QualityScale;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap()
    }

    fn state(ease_factor: f64, interval_days: u32, repetitions: u32) -> ReviewState {
        ReviewState::new(ease_factor, interval_days, repetitions, Some(now())).unwrap()
    }

    #[test]
    fn test_first_review() {
        let next = schedule_next_review(&ReviewState::default(), SelfRating::Good, now()).unwrap();
        assert_eq!(next.interval_days(), 1);
        assert_eq!(next.repetitions(), 1);
        assert_eq!(next.next_review_at(), Some(now() + Duration::days(1)));
    }

    #[test]
    fn test_second_review() {
        let next = schedule_next_review(&state(2.5, 1, 1), SelfRating::Good, now()).unwrap();
        assert_eq!(next.interval_days(), 6);
        assert_eq!(next.repetitions(), 2);
    }

    #[test]
    fn test_great_after_second_review() {
        let next = schedule_next_review(&state(2.5, 6, 2), SelfRating::Great, now()).unwrap();
        assert!((next.ease_factor() - 2.6).abs() < 1e-9);
        assert_eq!(next.repetitions(), 3);
        assert_eq!(next.interval_days(), 16);
        assert_eq!(next.next_review_at(), Some(now() + Duration::days(16)));
    }

    #[test]
    fn test_poor_resets() {
        let next = schedule_next_review(&state(2.5, 10, 5), SelfRating::Poor, now()).unwrap();
        assert_eq!(next.interval_days(), 1);
        assert_eq!(next.repetitions(), 0);
        // EF should still be updated
        assert!(next.ease_factor() < 2.5);
        assert_eq!(next.next_review_at(), Some(now() + Duration::days(1)));
    }

    #[test]
    fn test_fair_lowers_ease_but_passes() {
        let next = schedule_next_review(&state(2.5, 6, 2), SelfRating::Fair, now()).unwrap();
        assert!((next.ease_factor() - 2.36).abs() < 1e-9);
        assert_eq!(next.repetitions(), 3);
        assert_eq!(next.interval_days(), 14);
    }

    #[test]
    fn test_ef_floor() {
        let mut current = state(1.3, 1, 1);
        for _ in 0..10 {
            current = schedule_next_review(&current, SelfRating::Poor, now()).unwrap();
            assert!(current.ease_factor() >= MIN_EASE_FACTOR);
        }
        assert_eq!(current.ease_factor(), MIN_EASE_FACTOR);
    }

    #[test]
    fn test_corrupted_ease_is_clamped_on_read() {
        let stored: ReviewState =
            serde_json::from_str(r#"{ "easeFactor": 0.5, "intervalDays": 6, "repetitions": 2 }"#)
                .unwrap();
        let next = schedule_next_review(&stored, SelfRating::Great, now()).unwrap();
        assert!((next.ease_factor() - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_huge_interval_overflows_date() {
        let result = schedule_next_review(&state(2.5, u32::MAX, 9), SelfRating::Good, now());
        assert!(matches!(result, Err(RecallError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_custom_config() {
        let scheduler = Scheduler::new(SchedulerConfig {
            second_interval_days: 3,
            quality: QualityScale {
                poor: 0,
                ..QualityScale::default()
            },
            ..SchedulerConfig::default()
        })
        .unwrap();

        let next = scheduler
            .schedule_next_review(&state(2.5, 1, 1), SelfRating::Good, now())
            .unwrap();
        assert_eq!(next.interval_days(), 3);

        let lapse = scheduler
            .schedule_next_review(&state(2.5, 1, 1), SelfRating::Poor, now())
            .unwrap();
        assert!((lapse.ease_factor() - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_initial_state_uses_configured_ease() {
        let scheduler = Scheduler::new(SchedulerConfig {
            initial_ease_factor: 2.8,
            ..SchedulerConfig::default()
        })
        .unwrap();
        let initial = scheduler.initial_state();
        assert_eq!(initial.ease_factor(), 2.8);
        assert_eq!(initial.repetitions(), 0);
        assert!(initial.next_review_at().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SchedulerConfig {
            first_interval_days: 0,
            ..SchedulerConfig::default()
        };
        assert!(Scheduler::new(config).is_err());
    }

    #[test]
    fn test_preview_intervals() {
        let preview = Scheduler::default()
            .preview_intervals(&state(2.5, 6, 2), now())
            .unwrap();
        assert_eq!(
            preview,
            [
                (SelfRating::Poor, 1),
                (SelfRating::Fair, 14),
                (SelfRating::Good, 15),
                (SelfRating::Great, 16),
            ]
        );
    }
}
