use secrecy::SecretString;
use std::env;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| "openai_api_key".to_string()),
            ),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
        }
    }

    /// Validate that the API key is actually set before going near the network
    pub fn validate(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let key = self.openai_api_key.expose_secret();
        if key == "openai_api_key" || key.trim().is_empty() {
            return Err(AppError::ValidationError(
                "OPENAI_API_KEY is not set. Export it or add it to a .env file.".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_base_url: "http://localhost:9999/v1".to_string(),
            model: "gpt-4o".to_string(),
            request_timeout_secs: 5,
        }
    }
}
