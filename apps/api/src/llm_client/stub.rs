//! In-process `TextGenerator` stand-ins for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Returns the prompt it was given and counts calls.
#[derive(Default)]
pub struct EchoGenerator {
    calls: AtomicUsize,
}

impl EchoGenerator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(prompt.to_string())
    }

    fn model(&self) -> &str {
        "echo"
    }
}

/// Always fails with a provider error, and counts calls.
#[derive(Default)]
pub struct FailingGenerator {
    calls: AtomicUsize,
}

impl FailingGenerator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(LlmError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        })
    }

    fn model(&self) -> &str {
        "failing"
    }
}
