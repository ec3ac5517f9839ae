//! Profile commands

use std::path::Path;

use anyhow::{bail, Result};

use aasha_core::UserProfile;

use super::{load_store, save_store};

pub fn cmd_profile_show(data_path: &Path) -> Result<()> {
    let store = load_store(data_path)?;
    let profile = store.profile();

    println!();
    println!("👤 {}", profile.name);
    println!("   {}", profile.bio);
    Ok(())
}

pub fn cmd_profile_set(data_path: &Path, name: Option<&str>, bio: Option<&str>) -> Result<()> {
    if name.is_none() && bio.is_none() {
        bail!("Nothing to update; pass --name and/or --bio");
    }
    if let Some(name) = name {
        if name.trim().is_empty() {
            bail!("Name cannot be empty");
        }
    }

    let mut store = load_store(data_path)?;
    let current = store.profile();
    let updated = UserProfile {
        name: name.map(str::to_string).unwrap_or_else(|| current.name.clone()),
        bio: bio.map(str::to_string).unwrap_or_else(|| current.bio.clone()),
        avatar: current.avatar.clone(),
    };
    store.set_profile(updated);
    save_store(data_path, &store)?;

    println!("✅ Profile updated: {}", store.profile().name);
    Ok(())
}
