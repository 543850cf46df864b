use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};

use crate::config::Config;
use crate::trivia::error::Result;
use crate::trivia::gemini::GeminiProvider;

/// Shown instead of trivia when no credential is configured.
pub const MISSING_KEY_MESSAGE: &str = "Add your API key to see number trivia!";

/// Fallback when the service answers with blank text.
pub fn empty_fallback(number: i64) -> String {
    format!("The number {number} is very special!")
}

/// Fallback when the service call fails.
pub fn failure_fallback(number: i64) -> String {
    format!("The number {number} was drawn!")
}

/// Something that can write a short sentence about a number.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaProvider: Send + Sync {
    async fn generate(&self, number: i64) -> Result<String>;
}

/// Best-effort trivia: always resolves to displayable text.
///
/// Provider errors are logged and replaced by a fixed sentence mentioning the
/// number; a missing provider yields [`MISSING_KEY_MESSAGE`].
#[derive(Clone, Default)]
pub struct TriviaLookup {
    provider: Option<Arc<dyn TriviaProvider>>,
}

impl TriviaLookup {
    pub fn new(provider: Arc<dyn TriviaProvider>) -> Self {
        TriviaLookup { provider: Some(provider) }
    }

    pub fn disabled() -> Self {
        TriviaLookup { provider: None }
    }

    /// Gemini-backed lookup when `config` carries an API key, disabled otherwise.
    pub fn from_config(config: &Config) -> Self {
        let api_key = match config.api_key.as_deref() {
            Some(key) => key,
            None => {
                debug!("no API key configured, trivia disabled");
                return Self::disabled();
            }
        };

        match GeminiProvider::new(&config.api_base, api_key, &config.model, &config.language) {
            Ok(provider) => Self::new(Arc::new(provider)),
            Err(err) => {
                error!("cannot set up trivia provider: {err}");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn lookup(&self, number: i64) -> String {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => return MISSING_KEY_MESSAGE.to_string(),
        };

        match provider.generate(number).await {
            Ok(text) if text.trim().is_empty() => empty_fallback(number),
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                error!("error fetching trivia for {number}: {err}");
                failure_fallback(number)
            }
        }
    }
}
