// Application state shared by every invocation

use std::sync::Arc;
use anyhow::Context;
use crate::config::environment::EnvironmentVariables;
use crate::upstream::GeminiClient;

// Immutable per-process state; handlers never mutate it
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub gemini: GeminiClient,
}

impl AppState {
    /// Builds the state from an already loaded configuration
    pub fn new(environment: EnvironmentVariables) -> anyhow::Result<Self> {
        let gemini: GeminiClient = GeminiClient::new(
            environment.gemini_base_url.to_string(),
            environment.gemini_model.to_string(),
        )
        .context("Failed to build the Gemini HTTP client")?;

        Ok(Self {
            environment: Arc::new(environment),
            gemini,
        })
    }

    /// Loads configuration from the process environment and builds the state
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;

        if environment.gemini_api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; relay requests will fail with 500");
        }

        Self::new(environment)
    }
}
