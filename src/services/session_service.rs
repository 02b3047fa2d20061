use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::domain::{AnswerMap, AnswerValue, LearningBundle, Question, ScoredResult};
use crate::services::evaluation_service::EvaluationService;
use crate::services::model_service::ContentGenerator;

/// Where the session currently is: no bundle yet, quiz underway, or results
/// available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    InProgress,
    Completed,
}

/// One user's learning session. Holds the installed bundle, the answers
/// recorded so far, and the position in the quiz walk.
///
/// Invariant: `current_index` stays within `[0, question_count]`, and exactly
/// the questions at indices below it have recorded answers.
pub struct LearningSession {
    generator: Arc<dyn ContentGenerator>,
    id: Uuid,
    bundle: Option<LearningBundle>,
    answers: AnswerMap,
    current_index: usize,
    completed: bool,
    started_at: Option<DateTime<Utc>>,
}

impl LearningSession {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            generator,
            id: Uuid::new_v4(),
            bundle: None,
            answers: AnswerMap::new(),
            current_index: 0,
            completed: false,
            started_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> SessionStatus {
        match (&self.bundle, self.completed) {
            (None, _) => SessionStatus::Idle,
            (Some(_), false) => SessionStatus::InProgress,
            (Some(_), true) => SessionStatus::Completed,
        }
    }

    /// Generates and installs a fresh bundle for the topic.
    ///
    /// Blank topics are ignored. A generation or parse failure propagates and
    /// leaves all prior state untouched; a success discards any in-flight
    /// progress without confirmation and restarts the walk at question zero.
    pub async fn submit_topic(&mut self, topic: &str) -> AppResult<()> {
        if topic.trim().is_empty() {
            log::debug!("ignoring blank topic submission");
            return Ok(());
        }

        let raw = self.generator.generate(topic).await?;
        let bundle = LearningBundle::parse(&raw)?;

        log::info!(
            "session {}: installed bundle '{}' ({} questions)",
            self.id,
            bundle.title,
            bundle.question_count()
        );

        // A bundle with no questions has nothing to walk: index 0 already
        // equals the question count, so the session completes on install.
        self.completed = bundle.question_count() == 0;
        self.bundle = Some(bundle);
        self.answers = AnswerMap::new();
        self.current_index = 0;
        self.started_at = Some(Utc::now());

        Ok(())
    }

    /// The question the user is currently on, if the quiz is underway.
    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            return None;
        }
        self.bundle.as_ref()?.questions.get(self.current_index)
    }

    /// Records the user's value for the current question, overwriting any
    /// earlier value for it. No-op outside of an in-progress quiz.
    pub fn record_answer(&mut self, answer: AnswerValue) {
        if self.status() != SessionStatus::InProgress {
            return;
        }
        self.answers.insert(self.current_index, answer);
    }

    /// Moves to the next question, gated on the current answer being present
    /// and non-empty. This is the sole input-validation gate; it checks
    /// presence, not correctness. Returns whether the index moved.
    pub fn advance(&mut self) -> bool {
        let Some(bundle) = &self.bundle else {
            return false;
        };
        if self.completed {
            return false;
        }

        let has_answer = self
            .answers
            .get(&self.current_index)
            .is_some_and(|a| !a.is_empty());
        if !has_answer {
            return false;
        }

        self.current_index += 1;
        if self.current_index == bundle.question_count() {
            self.completed = true;
            log::info!("session {}: quiz completed", self.id);
        }

        true
    }

    /// Grades the quiz. Available only once the walk has completed.
    pub fn results(&self) -> Option<(usize, Vec<ScoredResult>)> {
        if !self.completed {
            return None;
        }
        let bundle = self.bundle.as_ref()?;
        Some(EvaluationService::evaluate(&self.answers, bundle))
    }

    // Accessors for the rendering boundary.

    pub fn title(&self) -> Option<&str> {
        self.bundle.as_ref().map(|b| b.title.as_str())
    }

    pub fn summary(&self) -> Option<&str> {
        self.bundle.as_ref().map(|b| b.summary.as_str())
    }

    /// The timeline data verbatim, or `None` to signal "no timeline
    /// available".
    pub fn timeline(&self) -> Option<&serde_json::Value> {
        self.bundle.as_ref()?.timeline.as_ref()
    }

    pub fn question_count(&self) -> usize {
        self.bundle.as_ref().map_or(0, |b| b.question_count())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}
