pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod models;
pub mod stats;

pub use clock::{Clock, SimulatedClock, SystemClock};
pub use config::SchedulerConfig;
pub use error::{RecallError, Result};
pub use i18n::{Locale, TextFormatter};
pub use models::{
    DueStatus, DueTag, PracticeSession, Question, QuestionReview, QuestionSet, QuestionStatus,
    ReviewState, Scheduler, SelfRating, classify_due_status, derive_question_status, due_queue,
    schedule_next_review,
};
pub use stats::ProgressSummary;
