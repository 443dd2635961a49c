//! Due classification of a review date relative to "now".
//!
//! This is a projection recomputed on every read. It changes with wall-clock
//! time while the stored review state only changes when a rating is logged.

use super::QuestionReview;
use crate::i18n::TextFormatter;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Semantic due state, rendered to text by a [`TextFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DueTag {
    NeverReviewed,
    DueNow,
    #[serde(rename = "DUE_IN_N_DAYS")]
    DueInDays(i64),
}

impl DueTag {
    pub fn classify(next_review_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match next_review_at {
            None => DueTag::NeverReviewed,
            Some(at) if at <= now => DueTag::DueNow,
            Some(at) => DueTag::DueInDays(ceil_days(at - now)),
        }
    }

    pub fn is_due(&self) -> bool {
        !matches!(self, DueTag::DueInDays(_))
    }

    pub fn days_until(&self) -> Option<i64> {
        match self {
            DueTag::NeverReviewed => None,
            DueTag::DueNow => Some(0),
            DueTag::DueInDays(days) => Some(*days),
        }
    }
}

/// Whole days, rounded up. Only called with a positive span.
fn ceil_days(span: Duration) -> i64 {
    let whole = span.num_days();
    if span > Duration::days(whole) {
        whole + 1
    } else {
        whole
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueStatus {
    pub is_due: bool,
    pub days_until: Option<i64>,
    pub tag: DueTag,
    pub text: String,
}

pub fn classify_due_status(
    next_review_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    formatter: &dyn TextFormatter,
) -> DueStatus {
    let tag = DueTag::classify(next_review_at, now);
    DueStatus {
        is_due: tag.is_due(),
        days_until: tag.days_until(),
        text: formatter.due_text(&tag),
        tag,
    }
}

/// Reviews due at `now`: never-reviewed first, then the longest overdue.
pub fn due_queue(reviews: &[QuestionReview], now: DateTime<Utc>) -> Vec<&QuestionReview> {
    let mut due: Vec<&QuestionReview> = reviews.iter().filter(|r| r.is_due(now)).collect();
    // None sorts before Some, so never-reviewed questions lead
    due.sort_by_key(|r| r.next_review_at());
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::models::{Question, ReviewState};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn review(id: i64, next_review_at: Option<DateTime<Utc>>) -> QuestionReview {
        let review = QuestionReview::new(Question::new(id, format!("Question {}", id)));
        match next_review_at {
            Some(at) => review.with_state(ReviewState::new(2.5, 1, 1, Some(at)).unwrap()),
            None => review,
        }
    }

    #[test]
    fn test_never_reviewed() {
        let status = classify_due_status(None, now(), &Locale::En);
        assert!(status.is_due);
        assert_eq!(status.days_until, None);
        assert_eq!(status.tag, DueTag::NeverReviewed);
    }

    #[test]
    fn test_overdue_is_due_now() {
        let status = classify_due_status(Some(now() - Duration::days(1)), now(), &Locale::En);
        assert!(status.is_due);
        assert_eq!(status.days_until, Some(0));
        assert_eq!(status.tag, DueTag::DueNow);
    }

    #[test]
    fn test_exactly_now_is_due() {
        assert_eq!(DueTag::classify(Some(now()), now()), DueTag::DueNow);
    }

    #[test]
    fn test_due_in_three_days() {
        let status = classify_due_status(Some(now() + Duration::days(3)), now(), &Locale::En);
        assert!(!status.is_due);
        assert_eq!(status.days_until, Some(3));
        assert_eq!(status.tag, DueTag::DueInDays(3));
        assert_eq!(status.text, "due in 3 days");
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let tag = DueTag::classify(Some(now() + Duration::hours(1)), now());
        assert_eq!(tag, DueTag::DueInDays(1));

        let tag = DueTag::classify(Some(now() + Duration::days(2) + Duration::seconds(1)), now());
        assert_eq!(tag, DueTag::DueInDays(3));
    }

    #[test]
    fn test_tag_serialization() {
        let json = serde_json::to_value(DueTag::DueInDays(4)).unwrap();
        assert_eq!(json["kind"], "DUE_IN_N_DAYS");
        assert_eq!(json["days"], 4);

        let json = serde_json::to_value(DueTag::NeverReviewed).unwrap();
        assert_eq!(json["kind"], "NEVER_REVIEWED");
    }

    #[test]
    fn test_due_queue_order() {
        let reviews = vec![
            review(1, Some(now() - Duration::days(1))),
            review(2, Some(now() + Duration::days(2))),
            review(3, None),
            review(4, Some(now() - Duration::days(5))),
        ];

        let ids: Vec<i64> = due_queue(&reviews, now())
            .iter()
            .map(|r| r.question.id)
            .collect();
        assert_eq!(ids, vec![3, 4, 1]);
    }
}
