//! Mock summarizer for testing.

use super::{ProviderError, Summarizer};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum MockBehavior {
    Echo,
    Reply(String),
    Fail(String),
}

/// Summarizer that never leaves the process. Every prompt it receives is recorded.
pub struct MockSummarizer {
    behavior: MockBehavior,
    prompts: Mutex<Vec<String>>,
}

impl MockSummarizer {
    /// Replies with `Mock summary for: <prompt>`.
    pub fn echo() -> Self {
        Self::with_behavior(MockBehavior::Echo)
    }

    /// Replies with a fixed text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(text.into()))
    }

    /// Fails every call with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fail(message.into()))
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(prompt.to_string());

        match &self.behavior {
            MockBehavior::Echo => Ok(format!("Mock summary for: {}", prompt)),
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
