use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

/// A user's submitted value for one question. Checkbox questions record a
/// selection; every other kind records a single text value.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Selection(Vec<String>),
}

impl AnswerValue {
    /// The advance gate: a selection counts when it has at least one entry,
    /// a text answer when it is not the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.is_empty(),
            AnswerValue::Selection(items) => items.is_empty(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            AnswerValue::Text(s) => s.clone(),
            AnswerValue::Selection(items) => items.join(", "),
        }
    }
}

impl Default for AnswerValue {
    fn default() -> Self {
        AnswerValue::Text(String::new())
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(items: Vec<String>) -> Self {
        AnswerValue::Selection(items)
    }
}

/// Submitted answers keyed by question index.
pub type AnswerMap = HashMap<usize, AnswerValue>;

/// Per-question grading outcome, in question order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredResult {
    pub question: Question,
    pub user_answer: AnswerValue,
    pub is_correct: bool,
}
