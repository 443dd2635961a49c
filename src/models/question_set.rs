//! A named collection of questions with the user's progress on each.
use super::{QuestionReview, ReviewState, Scheduler, SelfRating};
use crate::error::{RecallError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<QuestionReview>,
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self {
            name: "My Questions".to_string(),
            questions: Vec::new(),
        }
    }
}

impl QuestionSet {
    pub fn get(&self, question_id: i64) -> Option<&QuestionReview> {
        self.questions.iter().find(|r| r.question.id == question_id)
    }

    pub fn get_mut(&mut self, question_id: i64) -> Option<&mut QuestionReview> {
        self.questions.iter_mut().find(|r| r.question.id == question_id)
    }

    /// Loads the state of one question, schedules it and stores the result.
    pub fn apply_rating(
        &mut self,
        question_id: i64,
        rating: SelfRating,
        now: DateTime<Utc>,
        scheduler: &Scheduler,
    ) -> Result<&ReviewState> {
        self.get_mut(question_id)
            .ok_or(RecallError::QuestionNotFound(question_id))?
            .record_rating(rating, now, scheduler)
    }

    /// Replaces stored reviews with updated copies, matched by question id.
    pub fn merge(&mut self, updated: Vec<QuestionReview>) {
        for review in updated {
            match self.get_mut(review.question.id) {
                Some(existing) => *existing = review,
                None => self.questions.push(review),
            }
        }
    }
}
