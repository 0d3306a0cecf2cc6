pub mod answers;
pub mod questions;

pub use answers::AnswerSet;
pub use questions::{find_question, Question, QuizOption, QUESTIONS};

use crate::career::{score_quiz, CareerCategory, QuizOutcome, ScoringTable};
use crate::notifications::NotificationCenter;
use crate::store::{KvStore, ANSWERS_KEY, RESULT_KEY};
use anyhow::Result;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    UnknownQuestion(String),
    UnknownOption { question: String, option: String },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::UnknownQuestion(id) => write!(f, "Unknown question '{}'", id),
            QuizError::UnknownOption { question, option } => {
                write!(f, "Question '{}' has no option '{}'", question, option)
            }
        }
    }
}

impl std::error::Error for QuizError {}

/// Resolve a user selection against the catalogue.
///
/// `option` may be the full option key (`q3_data`) or just the category
/// suffix (`data`).
pub fn check_selection(question_id: &str, option: &str) -> Result<&'static QuizOption, QuizError> {
    let question = find_question(question_id)
        .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;

    let suffixed = format!("{}_{}", question.id, option);
    question
        .option(option)
        .or_else(|| question.option(&suffixed))
        .ok_or_else(|| QuizError::UnknownOption {
            question: question_id.to_string(),
            option: option.to_string(),
        })
}

/// Load stored answers. An unreadable blob is reported and treated as empty.
pub fn load_answers(store: &KvStore, notices: &mut NotificationCenter) -> AnswerSet {
    match store.get_json::<AnswerSet>(ANSWERS_KEY) {
        Ok(Some(answers)) => answers,
        Ok(None) => AnswerSet::new(),
        Err(e) => {
            notices.warn("Could not read saved answers", format!("{:#}", e));
            AnswerSet::new()
        }
    }
}

pub fn save_answers(store: &mut KvStore, answers: &AnswerSet) -> Result<()> {
    store.set_json(ANSWERS_KEY, answers)
}

/// Persist the answers, score them and persist the career result label.
pub fn submit_quiz(
    store: &mut KvStore,
    answers: &AnswerSet,
    table: &ScoringTable,
) -> Result<QuizOutcome> {
    save_answers(store, answers)?;
    let outcome = score_quiz(answers, table);
    store.set(RESULT_KEY, outcome.result.label())?;
    Ok(outcome)
}

/// Stored career result, if the quiz was ever submitted.
///
/// The label form is what gets written; the short key is accepted too.
pub fn load_result(store: &KvStore) -> Option<CareerCategory> {
    store
        .get(RESULT_KEY)
        .and_then(|raw| raw.parse::<CareerCategory>().ok())
}

/// Forget answers and result
pub fn reset_quiz(store: &mut KvStore) -> Result<()> {
    store.remove(ANSWERS_KEY)?;
    store.remove(RESULT_KEY)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_selection_full_key_and_suffix() {
        assert_eq!(check_selection("q2", "q2_ux").unwrap().key, "q2_ux");
        assert_eq!(check_selection("q2", "gestao").unwrap().key, "q2_gestao");
    }

    #[test]
    fn test_check_selection_errors() {
        assert_eq!(
            check_selection("q9", "q9_ux").unwrap_err(),
            QuizError::UnknownQuestion("q9".to_string())
        );
        let err = check_selection("q1", "q2_ux").unwrap_err();
        assert_eq!(err.to_string(), "Question 'q1' has no option 'q2_ux'");
    }

    #[test]
    fn test_submit_persists_answers_and_result() {
        let mut store = KvStore::in_memory();
        let mut answers = AnswerSet::new();
        answers.select("q1", "q1_data");
        answers.select("q2", "q2_data");
        answers.select("q3", "q3_ux");

        let outcome = submit_quiz(&mut store, &answers, &ScoringTable::default_catalogue()).unwrap();

        assert_eq!(outcome.result, CareerCategory::DataScience);
        assert_eq!(store.get(RESULT_KEY), Some("Data Science"));
        assert_eq!(load_result(&store), Some(CareerCategory::DataScience));

        let mut notices = NotificationCenter::quiet();
        assert_eq!(load_answers(&store, &mut notices), answers);
        assert_eq!(notices.unread_count(), 0);
    }

    #[test]
    fn test_submit_empty_answers_stores_first_category() {
        let mut store = KvStore::in_memory();
        let outcome =
            submit_quiz(&mut store, &AnswerSet::new(), &ScoringTable::default_catalogue()).unwrap();
        assert_eq!(outcome.result, CareerCategory::Software);
        assert_eq!(store.get(RESULT_KEY), Some("Engenharia de Software"));
    }

    #[test]
    fn test_load_answers_malformed_falls_back() {
        let mut store = KvStore::in_memory();
        store.set(ANSWERS_KEY, "[1,2,3]").unwrap();

        let mut notices = NotificationCenter::quiet();
        let answers = load_answers(&store, &mut notices);

        assert!(answers.is_empty());
        assert_eq!(notices.unread_count(), 1);
    }

    #[test]
    fn test_load_result_accepts_key_and_label() {
        let mut store = KvStore::in_memory();
        assert_eq!(load_result(&store), None);

        store.set(RESULT_KEY, "UX/UI Design").unwrap();
        assert_eq!(load_result(&store), Some(CareerCategory::UxDesign));

        store.set(RESULT_KEY, "gestao").unwrap();
        assert_eq!(load_result(&store), Some(CareerCategory::ProjectManagement));

        store.set(RESULT_KEY, "Análise de Sistemas").unwrap();
        assert_eq!(load_result(&store), None);
    }

    #[test]
    fn test_reset_quiz() {
        let mut store = KvStore::in_memory();
        let mut answers = AnswerSet::new();
        answers.select("q1", "q1_ux");
        submit_quiz(&mut store, &answers, &ScoringTable::default_catalogue()).unwrap();

        reset_quiz(&mut store).unwrap();
        assert!(store.get(ANSWERS_KEY).is_none());
        assert!(load_result(&store).is_none());
    }
}
