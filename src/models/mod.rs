pub mod due;
pub mod practice_card;
pub mod practice_session;
pub mod question;
pub mod question_set;
pub mod rating;
pub mod review_state;
pub mod sm2;
pub mod status;

pub use due::{DueStatus, DueTag, classify_due_status, due_queue};
pub use practice_card::PracticeCard;
pub use practice_session::PracticeSession;
pub use question::{Question, QuestionReview};
pub use question_set::QuestionSet;
pub use rating::SelfRating;
pub use review_state::{ReviewRecord, ReviewState};
pub use sm2::{Scheduler, schedule_next_review};
pub use status::{QuestionStatus, derive_question_status};
