use serde::{Deserialize, Serialize};

/// One generated quiz question, as produced by the model.
///
/// Field names follow the JSON the model is asked to emit (`question`, `type`),
/// so the struct deserializes straight off the response.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct: CorrectAnswer,
    #[serde(default)]
    pub explanation: String,
}

/// Response type of a question. Unknown kinds are rejected at parse time
/// rather than silently skipped later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    Checkbox,
    Dropdown,
    TrueFalse,
    ShortAnswer,
}

impl QuestionKind {
    /// Checkbox answers are selections; every other kind takes a single value.
    pub fn is_multi_select(&self) -> bool {
        matches!(self, QuestionKind::Checkbox)
    }
}

/// The model's stated correct answer: a single string for scalar kinds,
/// a list of strings for checkbox questions.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    One(String),
    Many(Vec<String>),
}

impl CorrectAnswer {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            CorrectAnswer::One(s) => Some(s),
            CorrectAnswer::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            CorrectAnswer::One(_) => None,
            CorrectAnswer::Many(items) => Some(items),
        }
    }

    /// Display form for the results view.
    pub fn display(&self) -> String {
        match self {
            CorrectAnswer::One(s) => s.clone(),
            CorrectAnswer::Many(items) => items.join(", "),
        }
    }
}
