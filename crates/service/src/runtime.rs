//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the data directory exists; warn when the seed file is absent.
pub async fn ensure_env(data_dir: &str, seed_path: &str) -> anyhow::Result<()> {
    common::env::ensure_env(data_dir, seed_path).await
}
