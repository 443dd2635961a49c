//! Learning status badge derived from the repetition count.
use serde::{Deserialize, Serialize};

/// Highest repetition count still considered `Learning`.
pub const LEARNING_MAX_REPETITIONS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    New,
    Learning,
    Mastered,
}

impl QuestionStatus {
    pub fn from_repetitions(repetitions: u32) -> Self {
        match repetitions {
            0 => QuestionStatus::New,
            1..=LEARNING_MAX_REPETITIONS => QuestionStatus::Learning,
            _ => QuestionStatus::Mastered,
        }
    }
}

pub fn derive_question_status(repetitions: u32) -> QuestionStatus {
    QuestionStatus::from_repetitions(repetitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert_eq!(derive_question_status(0), QuestionStatus::New);
        assert_eq!(derive_question_status(1), QuestionStatus::Learning);
        assert_eq!(derive_question_status(3), QuestionStatus::Learning);
        assert_eq!(derive_question_status(4), QuestionStatus::Mastered);
        assert_eq!(derive_question_status(u32::MAX), QuestionStatus::Mastered);
    }
}
