//! Human-readable text for due tags, statuses and intervals.

use crate::error::RecallError;
use crate::models::{DueTag, QuestionStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Renders semantic states into the caller's language.
pub trait TextFormatter {
    fn never_reviewed(&self) -> String;
    fn due_now(&self) -> String;
    fn due_in_days(&self, days: i64) -> String;
    fn status_label(&self, status: QuestionStatus) -> String;

    fn due_text(&self, tag: &DueTag) -> String {
        match tag {
            DueTag::NeverReviewed => self.never_reviewed(),
            DueTag::DueNow => self.due_now(),
            DueTag::DueInDays(days) => self.due_in_days(*days),
        }
    }
}

/// Built-in translations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pl,
}

impl FromStr for Locale {
    type Err = RecallError;

    /// Accepts bare languages and region tags such as `en-US` or `pl_PL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Ok(Locale::En),
            "pl" => Ok(Locale::Pl),
            _ => Err(RecallError::UnknownLocale(s.to_string())),
        }
    }
}

impl TextFormatter for Locale {
    fn never_reviewed(&self) -> String {
        match self {
            Locale::En => "new / never reviewed".to_string(),
            Locale::Pl => "nowe / jeszcze nie powtarzane".to_string(),
        }
    }

    fn due_now(&self) -> String {
        match self {
            Locale::En => "due now".to_string(),
            Locale::Pl => "do powtórki teraz".to_string(),
        }
    }

    fn due_in_days(&self, days: i64) -> String {
        match self {
            Locale::En if days == 1 => "due tomorrow".to_string(),
            Locale::En => format!("due in {} days", days),
            Locale::Pl if days == 1 => "do powtórki jutro".to_string(),
            Locale::Pl => format!("do powtórki za {} dni", days),
        }
    }

    fn status_label(&self, status: QuestionStatus) -> String {
        let label = match (self, status) {
            (Locale::En, QuestionStatus::New) => "New",
            (Locale::En, QuestionStatus::Learning) => "Learning",
            (Locale::En, QuestionStatus::Mastered) => "Mastered",
            (Locale::Pl, QuestionStatus::New) => "Nowe",
            (Locale::Pl, QuestionStatus::Learning) => "W nauce",
            (Locale::Pl, QuestionStatus::Mastered) => "Opanowane",
        };
        label.to_string()
    }
}

/// Formats an interval in days as a compact label for rating buttons
pub fn format_interval(days: u32) -> String {
    match days {
        0 => "now".to_string(),
        1..=6 => format!("{}d", days),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}

/// Formats a timestamp as YYYY-MM-DD
pub fn format_date(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d").to_string()
}
