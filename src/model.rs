use async_trait::async_trait;

/// The user-supplied half of a generation request.
#[derive(Clone, Debug, PartialEq)]
pub enum CopyInput {
    /// An encoded image, sent inline next to the prompt.
    Image { mime_type: String, data: Vec<u8> },
    /// Free text, sent as a second text part.
    Text(String),
}

/// A single call to the generative model: the instruction prompt followed by one input part.
#[derive(Clone, Debug, PartialEq)]
pub struct CopyRequest {
    pub prompt: &'static str,
    pub input: CopyInput,
}

/// Trait for the generative service that writes the marketing copy.
///
/// Implementors return the raw text produced by the model; sanitation and
/// parsing happen in the caller.
#[async_trait]
pub trait CopyModel: Send + Sync + 'static {
    /// The error type that can be returned by the model call.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs the prompt and input through the model and returns its text output.
    async fn generate(&self, request: CopyRequest) -> Result<String, Self::Error>;
}
