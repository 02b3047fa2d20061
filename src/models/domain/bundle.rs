use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::domain::Question;

/// The full generated learning package for one topic. Installed wholesale on a
/// successful generation and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LearningBundle {
    pub title: String,
    pub summary: String,
    pub questions: Vec<Question>,
    /// TimelineJS-shaped event data. The rendering widget owns its schema;
    /// this crate passes it through untouched and tolerates its absence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<serde_json::Value>,
}

impl LearningBundle {
    /// Parses the model's raw response text into a bundle.
    ///
    /// Fails with [`crate::errors::AppError::MalformedContent`] when the text is not valid
    /// JSON or lacks `title`, `summary`, or `questions`. A markdown-fenced
    /// payload is unwrapped first, since models routinely fence their output
    /// despite being told not to.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let payload = strip_code_fence(raw);

        let bundle: LearningBundle = serde_json::from_str(payload)?;

        log::debug!(
            "parsed learning bundle '{}' with {} questions (timeline: {})",
            bundle.title,
            bundle.questions.len(),
            if bundle.timeline.is_some() {
                "present"
            } else {
                "absent"
            }
        );

        Ok(bundle)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Unwraps a ```json ... ``` (or bare ``` ... ```) fence around the payload,
/// returning the input unchanged when no fence is present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the optional language tag on the opening fence line.
    match body.split_once('\n') {
        Some((first_line, remainder)) if first_line.trim().eq_ignore_ascii_case("json") => {
            remainder.trim()
        }
        _ => body.trim(),
    }
}
