#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{CorrectAnswer, LearningBundle, Question, QuestionKind};

    /// The example document the generation prompt advertises to the model.
    pub const EXAMPLE_BUNDLE_JSON: &str = r#"{
      "title": "Example Learning Title",
      "summary": "This is a brief summary of the learning topic.",
      "questions": [
        {
          "question": "What is the capital of France?",
          "type": "multiple-choice",
          "options": ["Paris", "London", "Rome", "Berlin"],
          "correct": "Paris",
          "explanation": "Paris is the capital and largest city of France."
        },
        {
          "question": "What is 2 + 2?",
          "type": "short-answer",
          "correct": "4",
          "explanation": "2 + 2 equals 4."
        },
        {
          "question": "Select all prime numbers.",
          "type": "checkbox",
          "options": ["2", "3", "4", "5"],
          "correct": ["2", "3", "5"],
          "explanation": "2, 3, and 5 are prime numbers."
        },
        {
          "question": "Select a fruit.",
          "type": "dropdown",
          "options": ["Apple", "Carrot", "Potato", "Tomato"],
          "correct": "Apple",
          "explanation": "Apple is a type of fruit, while the others are vegetables."
        },
        {
          "question": "True or False: The sky is green.",
          "type": "true-false",
          "correct": "False",
          "explanation": "The sky appears blue due to the scattering of sunlight."
        }
      ],
      "timeline": {
        "events": [
          {
            "start_date": { "year": "2020" },
            "text": {
              "headline": "Example Event 1",
              "text": "Description of example event 1."
            }
          }
        ]
      }
    }"#;

    pub fn example_bundle() -> LearningBundle {
        LearningBundle::parse(EXAMPLE_BUNDLE_JSON).expect("example bundle should parse")
    }

    pub fn multiple_choice_question() -> Question {
        example_bundle().questions[0].clone()
    }

    pub fn short_answer_question() -> Question {
        example_bundle().questions[1].clone()
    }

    pub fn checkbox_question() -> Question {
        example_bundle().questions[2].clone()
    }

    pub fn true_false_question() -> Question {
        example_bundle().questions[4].clone()
    }

    /// A minimal three-question bundle for flow-control tests.
    pub fn three_question_bundle_json() -> String {
        let bundle = LearningBundle {
            title: "Three Questions".to_string(),
            summary: "A short quiz.".to_string(),
            questions: (1..=3)
                .map(|n| Question {
                    text: format!("Question {n}?"),
                    kind: QuestionKind::ShortAnswer,
                    options: None,
                    correct: CorrectAnswer::One("answer".to_string()),
                    explanation: format!("Explanation {n}."),
                })
                .collect(),
            timeline: None,
        };

        serde_json::to_string(&bundle).expect("bundle should serialize")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuestionKind;

    #[test]
    fn test_fixtures_cover_every_question_kind() {
        let bundle = example_bundle();
        let kinds: Vec<QuestionKind> = bundle.questions.iter().map(|q| q.kind).collect();

        assert_eq!(
            kinds,
            vec![
                QuestionKind::MultipleChoice,
                QuestionKind::ShortAnswer,
                QuestionKind::Checkbox,
                QuestionKind::Dropdown,
                QuestionKind::TrueFalse,
            ]
        );
    }

    #[test]
    fn test_fixtures_three_question_bundle_round_trips() {
        let json = three_question_bundle_json();
        let bundle = crate::models::domain::LearningBundle::parse(&json).unwrap();

        assert_eq!(bundle.question_count(), 3);
    }
}
