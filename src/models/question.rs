//! Interview question paired with the user's review progress on it.
use super::{DueTag, QuestionStatus, ReviewState, Scheduler, SelfRating};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub answer: String,
}

impl Question {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            answer: String::new(),
        }
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }
}

/// A question and its review state. A missing state means never practiced;
/// the first rating starts from the scheduler's initial state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReview {
    pub question: Question,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ReviewState>,
}

impl QuestionReview {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            state: None,
        }
    }

    pub fn with_state(mut self, state: ReviewState) -> Self {
        self.state = Some(state);
        self
    }

    /// Stored state, or the scheduler's starting point for a new question.
    pub fn current_state(&self, scheduler: &Scheduler) -> ReviewState {
        self.state.clone().unwrap_or_else(|| scheduler.initial_state())
    }

    /// Schedules one rating and stores the resulting state.
    pub fn record_rating(
        &mut self,
        rating: SelfRating,
        now: DateTime<Utc>,
        scheduler: &Scheduler,
    ) -> Result<&ReviewState> {
        let next = scheduler.schedule_next_review(&self.current_state(scheduler), rating, now)?;
        Ok(&*self.state.insert(next))
    }

    pub fn repetitions(&self) -> u32 {
        self.state.as_ref().map_or(0, ReviewState::repetitions)
    }

    pub fn next_review_at(&self) -> Option<DateTime<Utc>> {
        self.state.as_ref().and_then(ReviewState::next_review_at)
    }

    pub fn status(&self) -> QuestionStatus {
        QuestionStatus::from_repetitions(self.repetitions())
    }

    pub fn due_tag(&self, now: DateTime<Utc>) -> DueTag {
        DueTag::classify(self.next_review_at(), now)
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_tag(now).is_due()
    }
}
