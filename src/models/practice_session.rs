//! Practice session management for spaced repetition review.
//! Handles multi-round question practice with SM-2 scheduling.

use super::{PracticeCard, QuestionReview, QuestionSet, Scheduler, SelfRating, due_queue};
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Manages a practice session with multiple rounds.
/// Questions rated `poor` are repeated in subsequent rounds.
pub struct PracticeSession {
    pub set_name: String,
    pub all_cards: Vec<PracticeCard>,
    pub current_round_cards: Vec<usize>,
    pub current_index: usize,
    pub show_answer: bool,
    pub round_number: usize,
    scheduler: Scheduler,
}

impl PracticeSession {
    /// Creates a new practice session from the questions due at `now`.
    pub fn new_from_due(set: &QuestionSet, now: DateTime<Utc>, scheduler: Scheduler) -> Self {
        let cards: Vec<_> = due_queue(&set.questions, now)
            .into_iter()
            .map(|review| PracticeCard::new(review.clone()))
            .collect();

        let indices: Vec<usize> = (0..cards.len()).collect();
        log::info!("Practice of '{}' started with {} due questions", set.name, cards.len());

        Self {
            set_name: set.name.clone(),
            all_cards: cards,
            current_round_cards: indices,
            current_index: 0,
            show_answer: false,
            round_number: 1,
            scheduler,
        }
    }

    pub fn current(&self) -> Option<&QuestionReview> {
        self.current_round_cards
            .get(self.current_index)
            .and_then(|&idx| self.all_cards.get(idx).map(|card| &card.review))
    }

    /// Answer of the current question, once it has been revealed.
    pub fn revealed_answer(&self) -> Option<&str> {
        if !self.show_answer {
            return None;
        }
        self.current().map(|review| review.question.answer.as_str())
    }

    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn next_question(&mut self) {
        if self.current_index + 1 < self.current_round_cards.len() {
            self.current_index += 1;
            self.show_answer = false;
        } else {
            self.start_next_round();
        }
    }

    /// Starts a new round with the questions that failed this one.
    /// If none failed, the session is complete.
    fn start_next_round(&mut self) {
        let failed_indices: Vec<usize> = self
            .current_round_cards
            .iter()
            .copied()
            .filter(|&idx| {
                self.all_cards
                    .get(idx)
                    .map(|card| !card.passed)
                    .unwrap_or(false)
            })
            .collect();

        if failed_indices.is_empty() {
            return;
        }

        self.current_round_cards = failed_indices;
        self.current_index = 0;
        self.show_answer = false;
        self.round_number += 1;
        log::info!(
            "Round {} of '{}': {} questions to retry",
            self.round_number,
            self.set_name,
            self.current_round_cards.len()
        );
    }

    /// Rates the current question and reschedules it immediately.
    /// Any rating except `poor` passes the question for this session.
    pub fn grade_current(&mut self, rating: SelfRating, now: DateTime<Utc>) -> Result<()> {
        let Some(&idx) = self.current_round_cards.get(self.current_index) else {
            return Ok(());
        };
        let Some(card) = self.all_cards.get_mut(idx) else {
            return Ok(());
        };

        card.grade(rating, now, &self.scheduler)?;
        Ok(())
    }

    pub fn passed_count(&self) -> usize {
        self.current_round_cards
            .iter()
            .filter(|&&idx| {
                self.all_cards
                    .get(idx)
                    .map(|card| card.passed)
                    .unwrap_or(false)
            })
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.current_round_cards.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.passed_count()
    }

    /// True when the current round is empty or every question in it passed.
    pub fn is_completed(&self) -> bool {
        self.current_round_cards.is_empty() || self.passed_count() == self.total_count()
    }

    pub fn phase_message(&self) -> String {
        if self.round_number == 1 {
            format!("Round {}: {} questions", self.round_number, self.total_count())
        } else {
            format!(
                "Round {} (Review): {} questions to retry",
                self.round_number,
                self.total_count()
            )
        }
    }

    /// Updated reviews of every question practiced, for the caller to store.
    pub fn into_reviews(self) -> Vec<QuestionReview> {
        self.all_cards.into_iter().map(|card| card.review).collect()
    }
}
