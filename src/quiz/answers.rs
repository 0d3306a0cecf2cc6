use super::questions::Question;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected option key per question id.
///
/// Serializes as a flat JSON object, the same blob the quiz screen stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    selections: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `option_key` for `question_id`, returning the previous choice
    pub fn select(&mut self, question_id: &str, option_key: &str) -> Option<String> {
        self.selections
            .insert(question_id.to_string(), option_key.to_string())
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.selections.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections.iter().map(|(q, k)| (q.as_str(), k.as_str()))
    }

    pub fn option_keys(&self) -> impl Iterator<Item = &str> {
        self.selections.values().map(String::as_str)
    }

    /// Questions from `questions` that have no selection yet
    pub fn unanswered<'a>(&self, questions: &'a [Question]) -> Vec<&'a Question> {
        questions
            .iter()
            .filter(|q| !self.selections.contains_key(q.id))
            .collect()
    }
}

impl FromIterator<(String, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            selections: iter.into_iter().collect(),
        }
    }
}
