use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Generation failed: {0}")]
    GenerationError(String),

    #[error("Malformed content: {0}")]
    MalformedContent(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::GenerationError(_) => "GENERATION_ERROR",
            AppError::MalformedContent(_) => "MALFORMED_CONTENT",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::GenerationError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedContent(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
