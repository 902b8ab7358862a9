//! Summarization client abstraction.
//!
//! Handlers only see the [`Summarizer`] trait, so the Gemini backend can be
//! swapped for [`mock::MockSummarizer`] in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered: {0}")]
    ContentFiltered(String),

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Turns a rendered prompt into a natural-language summary.
///
/// Implementations must not carry conversation state between calls: every
/// call starts from an empty history.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Submit `prompt` as a single message and return the model's reply verbatim.
    async fn summarize(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Model identifier, for logs and metrics.
    fn model(&self) -> &str;
}
