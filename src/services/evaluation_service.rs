use std::collections::HashSet;

use crate::models::domain::{
    AnswerMap, AnswerValue, LearningBundle, Question, QuestionKind, ScoredResult,
};
use crate::services::matching::{is_similar, normalize_answer};

pub struct EvaluationService;

impl EvaluationService {
    /// Grades every question in the bundle against the submitted answers.
    ///
    /// Total by construction: a missing answer defaults to empty and scores
    /// incorrect, as does an answer whose shape does not fit the question
    /// kind. Results preserve question order.
    pub fn evaluate(answers: &AnswerMap, bundle: &LearningBundle) -> (usize, Vec<ScoredResult>) {
        let mut total_correct = 0;
        let mut results = Vec::with_capacity(bundle.questions.len());

        for (index, question) in bundle.questions.iter().enumerate() {
            let user_answer = answers.get(&index).cloned().unwrap_or_default();
            let is_correct = Self::grade_question(question, &user_answer);

            if is_correct {
                total_correct += 1;
            }

            results.push(ScoredResult {
                question: question.clone(),
                user_answer,
                is_correct,
            });
        }

        (total_correct, results)
    }

    /// Grades an individual question based on its kind.
    fn grade_question(question: &Question, answer: &AnswerValue) -> bool {
        match question.kind {
            QuestionKind::MultipleChoice | QuestionKind::Dropdown | QuestionKind::TrueFalse => {
                let (AnswerValue::Text(submitted), Some(correct)) =
                    (answer, question.correct.as_single())
                else {
                    return false;
                };
                normalize_answer(submitted) == normalize_answer(correct)
            }
            QuestionKind::ShortAnswer => {
                let (AnswerValue::Text(submitted), Some(correct)) =
                    (answer, question.correct.as_single())
                else {
                    return false;
                };
                is_similar(&normalize_answer(submitted), &normalize_answer(correct))
            }
            QuestionKind::Checkbox => {
                let (AnswerValue::Selection(submitted), Some(correct)) =
                    (answer, question.correct.as_many())
                else {
                    return false;
                };
                let submitted: HashSet<String> =
                    submitted.iter().map(|s| normalize_answer(s)).collect();
                let correct: HashSet<String> =
                    correct.iter().map(|s| normalize_answer(s)).collect();
                submitted == correct
            }
        }
    }
}
