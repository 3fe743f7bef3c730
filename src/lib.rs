//! HTTP relay that turns product photos and descriptions into marketing copy
//! using a generative model.

pub mod config;
pub mod error;
pub mod gemini;
pub mod handlers;
pub mod messages;
pub mod model;
pub mod prompts;
pub mod sanitize;
pub mod server;

pub use config::{ConfigError, GeminiConfig};
pub use error::RelayError;
pub use gemini::{GeminiClient, GeminiError};
pub use messages::{MarketingSuggestion, MarketingSuggestions, ProductContent, Provenance};
pub use model::{CopyInput, CopyModel, CopyRequest};
pub use server::router;
