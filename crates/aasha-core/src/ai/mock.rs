//! Mock backend for testing
//!
//! Returns a canned empathetic reply without any network access. Useful
//! for unit tests and for running the server or CLI without credentials.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ChatMessage;

use super::CompanionBackend;

/// Mock companion backend
#[derive(Clone)]
pub struct MockBackend {
    /// Whether health_check should return true
    pub healthy: bool,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a new mock backend (healthy by default)
    pub fn new() -> Self {
        Self { healthy: true }
    }

    /// Create an unhealthy mock backend
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl CompanionBackend for MockBackend {
    async fn reply(
        &self,
        message: &str,
        history: &[ChatMessage],
        context: Option<&str>,
    ) -> Result<String> {
        // Echo enough of the input that tests can assert plumbing worked
        let mut reply = format!("I hear you. You said: \"{}\".", message);
        if !history.is_empty() {
            reply.push_str(&format!(" We've exchanged {} messages so far.", history.len()));
        }
        if context.is_some() {
            reply.push_str(" Thank you for letting me know how things have been.");
        }
        Ok(reply)
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
