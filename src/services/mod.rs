pub mod evaluation_service;
pub mod matching;
pub mod model_service;
pub mod session_service;

pub use evaluation_service::EvaluationService;
pub use model_service::{ContentGenerator, OpenAiContentGenerator};
pub use session_service::{LearningSession, SessionStatus};
