//! Ollama backend implementation
//!
//! HTTP client for a local Ollama server's chat API, for running the
//! companion against local models instead of the hosted Gemini API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ChatMessage, ChatRole};

use super::{instruction_with_context, CompanionBackend};

const DEFAULT_MODEL: &str = "llama3.2";

/// Companion backend talking to a local Ollama server
#[derive(Clone)]
pub struct OllamaBackend {
    http_client: Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    /// Create a new Ollama backend
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("OLLAMA_HOST").ok()?;
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(&host, &model))
    }
}

/// Request to the Ollama chat API
#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<OllamaChatMessage>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct OllamaChatMessage {
    role: String,
    content: String,
}

/// Response from the Ollama chat API
#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaChatMessage,
}

fn role_str(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        // Ollama follows the OpenAI convention
        ChatRole::Model => "assistant",
    }
}

#[async_trait]
impl CompanionBackend for OllamaBackend {
    async fn reply(
        &self,
        message: &str,
        history: &[ChatMessage],
        context: Option<&str>,
    ) -> Result<String> {
        let mut messages = vec![OllamaChatMessage {
            role: "system".to_string(),
            content: instruction_with_context(context),
        }];
        messages.extend(history.iter().map(|msg| OllamaChatMessage {
            role: role_str(msg.role).to_string(),
            content: msg.text.clone(),
        }));
        messages.push(OllamaChatMessage {
            role: "user".to_string(),
            content: message.to_string(),
        });

        let request = OllamaChatRequest {
            model: self.model.clone(),
            messages,
            stream: false,
        };

        let response = self
            .http_client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?;

        let response = response.error_for_status()?;

        let body: OllamaChatResponse = response.json().await?;
        debug!("Ollama response: {}", body.message.content);

        if body.message.content.is_empty() {
            return Err(Error::Companion("Empty response from Ollama".to_string()));
        }
        Ok(body.message.content)
    }

    async fn health_check(&self) -> bool {
        self.http_client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}
