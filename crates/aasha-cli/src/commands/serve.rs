//! Web server command

use std::path::Path;

use anyhow::Result;

use super::load_store;

pub async fn cmd_serve(data_path: &Path, host: &str, port: u16) -> Result<()> {
    let store = load_store(data_path)?;
    tracing::info!(
        moods = store.moods().len(),
        journal = store.journal().len(),
        "Loaded history snapshot"
    );

    aasha_server::serve(store, host, port).await
}
