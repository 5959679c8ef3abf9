//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected files and directories exist at startup.

use tracing::warn;

/// Ensure the data directory exists; warn when the seed file is absent.
pub async fn ensure_env(data_dir: &str, seed_path: &str) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    if tokio::fs::metadata(seed_path).await.is_err() {
        warn!(%seed_path, "seed file not found; builtin housing records will be served");
    }
    Ok(())
}
