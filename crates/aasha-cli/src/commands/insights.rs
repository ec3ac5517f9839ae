//! Derived-view command implementations (insights, stats, suggest, context)

use std::path::Path;

use anyhow::Result;

use aasha_core::insights::{derive_insights, derive_stats};
use aasha_core::suggestions::derive_suggestion_chips;
use aasha_core::{derive_context_summary, InsightKind};

use super::load_store;

fn kind_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Pattern => "🔎",
        InsightKind::Strength => "💪",
        InsightKind::Suggestion => "💡",
    }
}

pub fn cmd_insights(data_path: &Path) -> Result<()> {
    let store = load_store(data_path)?;
    let insights = derive_insights(store.moods(), store.journal());

    println!();
    println!("✨ Recent insights");
    println!("   ─────────────────────────────────────────────────────────────");
    for insight in insights {
        println!("   {} {} — {}", kind_icon(insight.kind), insight.title, insight.kind);
        println!("      {}", insight.text);
    }
    Ok(())
}

pub fn cmd_stats(data_path: &Path) -> Result<()> {
    let store = load_store(data_path)?;
    let stats = derive_stats(store.moods(), store.journal());

    let hours = stats.estimated_engagement_minutes / 60;
    let minutes = stats.estimated_engagement_minutes % 60;

    println!();
    println!("📊 Your numbers (estimates, not telemetry)");
    println!("   ─────────────────────────────────────────");
    println!("   Engagement: {}h {}m", hours, minutes);
    println!("   Self-care actions: {}", stats.action_count);
    println!("   Work mentions in journal: {}", stats.work_mention_count);
    Ok(())
}

pub fn cmd_suggest(data_path: &Path) -> Result<()> {
    let store = load_store(data_path)?;
    let chips = derive_suggestion_chips(store.moods(), store.journal());

    println!();
    println!("💬 Ways to start a conversation");
    println!("   ─────────────────────────────");
    for chip in chips {
        println!("   • {}", chip);
    }
    Ok(())
}

pub fn cmd_context(data_path: &Path) -> Result<()> {
    let store = load_store(data_path)?;
    let summary = derive_context_summary(store.moods(), store.journal(), Some(store.profile()));

    println!();
    println!("{}", summary);
    Ok(())
}
