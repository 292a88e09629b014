//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate can run its startup
//! checks through `service::runtime` alone.

/// Check the frontend directory; returns whether `index.html` is servable.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<bool> {
    common::env::ensure_static_dir(static_dir).await
}
