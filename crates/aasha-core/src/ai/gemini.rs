//! Gemini backend implementation
//!
//! HTTP client for the Google Generative Language API. The conversation
//! history is re-sent with every call; the context summary rides along in
//! the system instruction rather than the message stream.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ChatMessage, ChatRole};

use super::{instruction_with_context, CompanionBackend};

const DEFAULT_HOST: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Companion backend talking to the Generative Language API
#[derive(Clone)]
pub struct GeminiBackend {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    /// Create a new Gemini backend
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_host(DEFAULT_HOST, api_key, model)
    }

    /// Create with a custom host (for tests against a local stub)
    pub fn with_host(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok()?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(&api_key, &model))
    }
}

/// Request body for generateContent
#[derive(Debug, Serialize)]
struct GenerateRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response body from generateContent
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

fn role_str(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    }
}

#[async_trait]
impl CompanionBackend for GeminiBackend {
    async fn reply(
        &self,
        message: &str,
        history: &[ChatMessage],
        context: Option<&str>,
    ) -> Result<String> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|msg| Content {
                role: role_str(msg.role).to_string(),
                parts: vec![Part {
                    text: msg.text.clone(),
                }],
            })
            .collect();
        contents.push(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: message.to_string(),
            }],
        });

        let request = GenerateRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: instruction_with_context(context),
                }],
            },
            contents,
        };

        let response = self
            .http_client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let response = response.error_for_status()?;

        let body: GenerateResponse = response.json().await?;
        debug!(candidates = body.candidates.len(), "Gemini response received");

        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| Error::Companion("Empty response from Gemini".to_string()))
    }

    async fn health_check(&self) -> bool {
        self.http_client
            .get(format!("{}/v1beta/models/{}", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_construction() {
        let backend = GeminiBackend::new("test-key", "gemini-2.5-flash");
        assert_eq!(backend.model(), "gemini-2.5-flash");
        assert_eq!(backend.host(), DEFAULT_HOST);
    }

    #[test]
    fn test_with_host_trims_trailing_slash() {
        let backend = GeminiBackend::with_host("http://localhost:9999/", "k", "m");
        assert_eq!(backend.host(), "http://localhost:9999");
    }

    #[test]
    fn test_request_serialization_shape() {
        let request = GenerateRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: "persona".to_string(),
                }],
            },
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["system_instruction"]["parts"][0]["text"], "persona");
    }
}
