//! JSON import/export for question sets.
//! Saves and loads a QuestionSet, review progress included, to/from JSON files.

use crate::error::Result;
use crate::models::QuestionSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports a question set to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_json_to_path(set: &QuestionSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(set)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    log::info!("Question set '{}' exported to '{}'", set.name, path.display());
    Ok(())
}

/// Imports a question set from a JSON file.
/// Returns an error if the file doesn't exist, contains invalid JSON,
/// or holds a corrupted review state.
pub fn import_json(path: impl AsRef<Path>) -> Result<QuestionSet> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let set: QuestionSet = serde_json::from_str(&contents)?;

    log::info!("Question set '{}' imported from '{}'", set.name, path.display());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecallError;
    use crate::models::{Question, QuestionReview, QuestionStatus, ReviewState};
    use std::fs;
    use tempfile::tempdir;

    fn create_test_set() -> QuestionSet {
        let practiced = QuestionReview::new(
            Question::new(2, "What does a load balancer do?").with_answer("Spreads requests"),
        )
        .with_state(ReviewState::new(2.5, 15, 4, None).unwrap());

        QuestionSet {
            name: "Test Set".to_string(),
            questions: vec![
                QuestionReview::new(Question::new(1, "What is a race condition?")),
                practiced,
            ],
        }
    }

    #[test]
    fn test_export_json_to_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.json");

        export_json_to_path(&create_test_set(), &path).unwrap();

        assert!(fs::metadata(&path).is_ok(), "File should exist");
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"{
  "name": "Import Test Set",
  "questions": [
    {
      "question": { "id": 10, "title": "What is sharding?" },
      "state": { "easeFactor": 2.2, "intervalDays": 6, "repetitions": 2,
                 "nextReviewAt": "2026-02-01T00:00:00Z" }
    }
  ]
}"#;
        let dir = tempdir().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, json_content).unwrap();

        let set = import_json(&path).unwrap();
        assert_eq!(set.name, "Import Test Set");
        assert_eq!(set.questions.len(), 1);
        assert_eq!(set.questions[0].question.title, "What is sharding?");
        let state = set.questions[0].state.as_ref().unwrap();
        assert_eq!(state.interval_days(), 6);
        assert_eq!(set.questions[0].status(), QuestionStatus::Learning);
    }

    #[test]
    fn test_export_and_import_keep_progress() {
        let original = create_test_set();
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.json");

        export_json_to_path(&original, &path).unwrap();
        let imported = import_json(&path).unwrap();

        assert_eq!(original, imported);
        assert_eq!(imported.get(2).unwrap().status(), QuestionStatus::Mastered);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_json("nonexistent_file_xyz123.json");
        assert!(matches!(result, Err(RecallError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        assert!(matches!(import_json(&path), Err(RecallError::Json(_))));
    }

    #[test]
    fn test_import_rejects_negative_repetitions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupted.json");
        fs::write(
            &path,
            r#"{ "name": "x", "questions": [
                { "question": { "id": 1, "title": "q" }, "state": { "repetitions": -2 } }
            ] }"#,
        )
        .unwrap();

        assert!(import_json(&path).is_err());
    }
}
