//! Gemini `generateContent` client used as the production [`CopyModel`].

use async_trait::async_trait;
use base64::Engine as _;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::GeminiConfig;
use crate::model::{CopyInput, CopyModel, CopyRequest};

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode Gemini response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Gemini returned no candidates{}", blocked_suffix(.block_reason))]
    NoCandidates { block_reason: Option<String> },
}

fn blocked_suffix(reason: &Option<String>) -> String {
    reason
        .as_ref()
        .map(|reason| format!(" (blocked: {reason})"))
        .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    pub fn model_version(&self) -> &str {
        self.model_version.as_deref().unwrap_or("unknown")
    }

    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> Result<String, GeminiError> {
        let candidate = self.candidates.first().ok_or_else(|| GeminiError::NoCandidates {
            block_reason: self
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.clone()),
        })?;

        Ok(candidate
            .content
            .iter()
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .collect())
    }
}

/// Builds the ordered `parts` array: prompt first, then the user input.
pub fn request_parts(request: &CopyRequest) -> Vec<Value> {
    let input = match &request.input {
        CopyInput::Text(text) => json!({ "text": text }),
        CopyInput::Image { mime_type, data } => json!({
            "inlineData": {
                "mimeType": mime_type,
                "data": base64::engine::general_purpose::STANDARD.encode(data),
            }
        }),
    };

    vec![json!({ "text": request.prompt }), input]
}

pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl CopyModel for GeminiClient {
    type Error = GeminiError;

    async fn generate(&self, request: CopyRequest) -> Result<String, Self::Error> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": request_parts(&request),
            }]
        });

        log::debug!("Calling {} via generateContent", self.config.model);

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::Status { status, body: text });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        log::debug!("Gemini responded (model version {})", parsed.model_version());
        parsed.text()
    }
}
