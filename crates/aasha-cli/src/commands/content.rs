//! Static content commands (stories, pathways, activities)

use std::path::Path;

use anyhow::Result;

use aasha_core::{comfort_activities, growth_pathways};

use super::{load_store, truncate};

pub fn cmd_stories(data_path: &Path) -> Result<()> {
    let store = load_store(data_path)?;

    println!();
    println!("📖 Peer stories ({})", store.stories().len());
    println!("   ──────────────────────────────────────────────");
    for story in store.stories() {
        println!("   [{}] {} — {}", story.id, story.title, story.author);
        println!("       {}", truncate(&story.snippet, 90));
    }
    Ok(())
}

pub fn cmd_pathways() -> Result<()> {
    let pathways = growth_pathways();

    println!();
    println!("🌱 Growth pathways ({})", pathways.len());
    println!("   ──────────────────────────────────────────────");
    for pathway in pathways {
        println!("   [{}] {} ({})", pathway.id, pathway.title, pathway.category);
        println!("       {}", pathway.description);
    }
    Ok(())
}

pub fn cmd_activities() -> Result<()> {
    let activities = comfort_activities();

    println!();
    println!("🫧 Comfort activities ({})", activities.len());
    println!("   ──────────────────────────────────────────────");
    for activity in activities {
        println!(
            "   {} — {} (when {})",
            activity.title, activity.duration, activity.category
        );
        println!("       {}", activity.description);
    }
    Ok(())
}
