pub mod attempt;
pub mod bundle;
pub mod question;
pub use attempt::{AnswerMap, AnswerValue, ScoredResult};
pub use bundle::LearningBundle;
pub use question::{CorrectAnswer, Question, QuestionKind};
