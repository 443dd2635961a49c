//! Wrapper for questions that tracks progress within one practice session.
use super::{QuestionReview, ReviewState, Scheduler, SelfRating};
use crate::error::Result;
use chrono::{DateTime, Utc};

#[derive(Clone, Debug)]
pub struct PracticeCard {
    pub review: QuestionReview,
    pub passed: bool,
}

impl PracticeCard {
    pub fn new(review: QuestionReview) -> Self {
        Self {
            review,
            passed: false,
        }
    }

    /// Reschedules the question. Any rating except `poor` passes it.
    pub fn grade(
        &mut self,
        rating: SelfRating,
        now: DateTime<Utc>,
        scheduler: &Scheduler,
    ) -> Result<&ReviewState> {
        self.passed = !rating.is_lapse();
        self.review.record_rating(rating, now, scheduler)
    }
}
