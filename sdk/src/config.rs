use crate::{ConfigError, OpenAIChatModel, OpenAIChatModelOptions};
use serde::{Deserialize, Serialize};

/// Environment variable consulted when no explicit API key is configured.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Model used by the support chat unless overridden.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
/// Reply length bound sent with each chat completion request.
pub const DEFAULT_MAX_TOKENS: u32 = 200;
/// Sampling temperature sent with each chat completion request.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Deployment configuration for the remote completion service.
///
/// The credential resolves as: explicit `api_key`, then the [`API_KEY_ENV`]
/// environment variable. A missing key is a [`ConfigError`], never a
/// baked-in value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bearer credential for the completion service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Overrides the default OpenAI-compatible base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Overrides [`DEFAULT_MODEL`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ApiConfig {
    /// Resolve the credential: explicit config first, then the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when neither yields a
    /// non-empty value.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))
    }

    /// Build the chat model this config describes.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when no credential can be resolved.
    pub fn build_model(&self) -> Result<OpenAIChatModel, ConfigError> {
        let api_key = self.resolve_api_key()?;
        Ok(OpenAIChatModel::new(
            self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            OpenAIChatModelOptions {
                base_url: self.base_url.clone(),
                api_key,
                client: None,
            },
        ))
    }
}
