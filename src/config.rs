use secrecy::SecretString;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CRITICAL ERROR: GOOGLE_API_KEY not found. Please check your .env file.")]
    MissingApiKey,
}

/// Connection settings for the Gemini API, fixed for the process lifetime.
#[derive(Debug)]
pub struct GeminiConfig {
    pub api_key: SecretString,
    pub model: String,
    pub endpoint: String,
}

impl GeminiConfig {
    /// Reads the API key from the process environment.
    pub fn from_env(
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), model, endpoint)
    }

    /// Same as [`GeminiConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            model: model.into(),
            endpoint: endpoint.into(),
        })
    }
}
