//! Companion chat commands

use std::path::Path;

use anyhow::{bail, Result};

use aasha_core::{derive_context_summary, CompanionBackend, CompanionClient, FALLBACK_REPLY};

use super::load_store;

pub async fn cmd_chat(data_path: &Path, message: &str, no_context: bool) -> Result<()> {
    if message.trim().is_empty() {
        bail!("Message cannot be empty");
    }

    let Some(companion) = CompanionClient::from_env() else {
        bail!(
            "No companion backend configured. Set GEMINI_API_KEY (or AASHA_AI_BACKEND=ollama \
             with a running Ollama) and try again."
        );
    };

    let context = if no_context {
        None
    } else {
        let store = load_store(data_path)?;
        Some(derive_context_summary(
            store.moods(),
            store.journal(),
            Some(store.profile()),
        ))
    };

    tracing::debug!(model = %companion.model(), grounded = context.is_some(), "Sending chat message");

    let reply = match companion.reply(message, &[], context.as_deref()).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Companion request failed");
            FALLBACK_REPLY.to_string()
        }
    };

    println!();
    println!("🧡 Aasha:");
    println!("{}", reply);
    Ok(())
}

pub async fn cmd_companion_test() -> Result<()> {
    let Some(companion) = CompanionClient::from_env() else {
        bail!("No companion backend configured (set GEMINI_API_KEY or AASHA_AI_BACKEND)");
    };

    println!("Backend: {}", companion.host());
    println!("Model:   {}", companion.model());

    print!("Checking connectivity... ");
    if !companion.health_check().await {
        println!("unreachable ❌");
        bail!("Companion backend is not reachable");
    }
    println!("ok ✅");

    print!("Sending test message... ");
    match companion.reply("Hello! Just checking in.", &[], None).await {
        Ok(reply) => {
            println!("ok ✅");
            println!();
            println!("Reply: {}", super::truncate(&reply, 120));
            Ok(())
        }
        Err(e) => {
            println!("failed ❌");
            bail!("Test message failed: {e}");
        }
    }
}
