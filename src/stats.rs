//! Progress totals over a set of questions.
use crate::models::{QuestionReview, QuestionStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total: usize,
    pub new: usize,
    pub learning: usize,
    pub mastered: usize,
    pub due: usize,
    pub upcoming: usize,
}

impl ProgressSummary {
    pub fn from_reviews(reviews: &[QuestionReview], now: DateTime<Utc>) -> Self {
        reviews.iter().fold(Self::default(), |mut summary, review| {
            summary.total += 1;
            match review.status() {
                QuestionStatus::New => summary.new += 1,
                QuestionStatus::Learning => summary.learning += 1,
                QuestionStatus::Mastered => summary.mastered += 1,
            }
            if review.is_due(now) {
                summary.due += 1;
            } else {
                summary.upcoming += 1;
            }
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, ReviewState};
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_summary_counts() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let review = |id: i64, repetitions: u32, offset_days: Option<i64>| {
            let next_review_at = offset_days.map(|d| now + Duration::days(d));
            QuestionReview::new(Question::new(id, "q"))
                .with_state(ReviewState::new(2.5, 1, repetitions, next_review_at).unwrap())
        };

        let reviews = vec![
            review(1, 0, None),
            review(2, 2, Some(-1)),
            review(3, 3, Some(4)),
            review(4, 7, Some(30)),
        ];

        let summary = ProgressSummary::from_reviews(&reviews, now);
        assert_eq!(
            summary,
            ProgressSummary {
                total: 4,
                new: 1,
                learning: 2,
                mastered: 1,
                due: 2,
                upcoming: 2,
            }
        );
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(ProgressSummary::from_reviews(&[], Utc::now()), ProgressSummary::default());
    }
}
