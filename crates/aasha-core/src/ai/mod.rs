//! Pluggable companion backend abstraction
//!
//! Backend-agnostic interface for the chat companion. The engine's only
//! obligation to this boundary is to hand over a synchronously-built
//! context summary string; everything network-shaped lives here.
//!
//! # Architecture
//!
//! - `CompanionBackend` trait: defines the chat interface
//! - `CompanionClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `GeminiBackend`, `OllamaBackend`, `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `AASHA_AI_BACKEND`: Backend to use (gemini, ollama, mock). Default: gemini
//! - `GEMINI_API_KEY`: API key (required for gemini backend)
//! - `GEMINI_MODEL`: Model name (default: gemini-2.5-flash)
//! - `OLLAMA_HOST`: Ollama server URL (required for ollama backend)
//! - `OLLAMA_MODEL`: Model name (default: llama3.2)

mod gemini;
mod mock;
mod ollama;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;
pub use ollama::OllamaBackend;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ChatMessage;

/// The companion persona handed to every backend as the system instruction
pub const SYSTEM_INSTRUCTION: &str = "You are Aasha, a warm, empathetic, and safe companion for mental wellness. Your purpose is to be a supportive \"buddy\" who offers gentle guidance and helps users reflect on their emotions.

You are NOT a therapist. If a user expresses signs of severe distress, self-harm, or crisis, you MUST gently and clearly advise them to seek professional help immediately from a qualified therapist or a crisis hotline.

Your Core Persona & Capabilities:
1.  **Emotional Sensor:** You actively \"sense\" emotional shifts based on the context provided. If the user's mood history shows a downward trend or they mention stress in their journal, acknowledge it gently (\"I noticed you've been feeling a bit down lately...\").
2.  **Empathy First:** Use phrases like \"I hear you,\" \"It sounds like you're carrying a lot,\" or \"That sounds really tough.\"
3.  **Personalization:** Use the provided User Context (Mood History, Journal Entries, Bio) to tailor your conversation. Refer to specific things they've mentioned.
4.  **Empowerment:** Encourage self-reflection and proactive emotional management using the app's tools (breathing, journaling).
5.  **Simplicity:** Use clear, gentle, and accessible language. Be a friend, not a robot.

When the user sends a message, analyze the provided CONTEXT (Moods, Journal) to inform your tone and response.
";

/// Reply surfaced to the user when the backend call fails
pub const FALLBACK_REPLY: &str =
    "I'm feeling a bit disconnected right now. Could you say that again?";

/// Compose the system instruction with an optional user-context block
pub(crate) fn instruction_with_context(context: Option<&str>) -> String {
    match context {
        Some(ctx) => format!(
            "{}\n\n=== CURRENT USER CONTEXT (SENSORY DATA) ===\n{}\n\nUse the above sensory data to adjust your tone. If they seem stressed, be extra calming. If they are celebrating, join in.",
            SYSTEM_INSTRUCTION, ctx
        ),
        None => SYSTEM_INSTRUCTION.to_string(),
    }
}

/// Trait defining the interface for all companion backends
///
/// Backends must be Send + Sync to allow use across async tasks.
#[async_trait]
pub trait CompanionBackend: Send + Sync {
    /// Send a user message with the ordered conversation history and an
    /// optional context summary, returning the companion's reply text
    async fn reply(
        &self,
        message: &str,
        history: &[ChatMessage],
        context: Option<&str>,
    ) -> Result<String>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;

    /// Get the model name (for logging)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete companion client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum CompanionClient {
    /// Google Generative Language API backend
    Gemini(GeminiBackend),
    /// Ollama backend for local models
    Ollama(OllamaBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl CompanionClient {
    /// Create a companion client from environment variables
    ///
    /// Checks `AASHA_AI_BACKEND` to determine which backend to use:
    /// - `gemini` (default): Uses GEMINI_API_KEY and GEMINI_MODEL
    /// - `ollama`: Uses OLLAMA_HOST and OLLAMA_MODEL
    /// - `mock`: Creates a mock backend for testing
    ///
    /// Returns None if the required environment variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("AASHA_AI_BACKEND").unwrap_or_else(|_| "gemini".to_string());

        match backend.to_lowercase().as_str() {
            "gemini" => GeminiBackend::from_env().map(CompanionClient::Gemini),
            "ollama" => OllamaBackend::from_env().map(CompanionClient::Ollama),
            "mock" => Some(CompanionClient::Mock(MockBackend::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown AASHA_AI_BACKEND, falling back to gemini");
                GeminiBackend::from_env().map(CompanionClient::Gemini)
            }
        }
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        CompanionClient::Mock(MockBackend::new())
    }
}

#[async_trait]
impl CompanionBackend for CompanionClient {
    async fn reply(
        &self,
        message: &str,
        history: &[ChatMessage],
        context: Option<&str>,
    ) -> Result<String> {
        match self {
            CompanionClient::Gemini(b) => b.reply(message, history, context).await,
            CompanionClient::Ollama(b) => b.reply(message, history, context).await,
            CompanionClient::Mock(b) => b.reply(message, history, context).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            CompanionClient::Gemini(b) => b.health_check().await,
            CompanionClient::Ollama(b) => b.health_check().await,
            CompanionClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            CompanionClient::Gemini(b) => b.model(),
            CompanionClient::Ollama(b) => b.model(),
            CompanionClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            CompanionClient::Gemini(b) => b.host(),
            CompanionClient::Ollama(b) => b.host(),
            CompanionClient::Mock(b) => b.host(),
        }
    }
}
