//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use std::path::Path;

use tracing::{info, warn};

/// Check that the frontend directory is present.
///
/// A missing directory is not fatal: the JSON API keeps working and only
/// `/static/*` answers 404. Returns whether `index.html` was found.
pub async fn ensure_static_dir(static_dir: &str) -> anyhow::Result<bool> {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(anyhow::anyhow!("{static_dir} exists but is not a directory"));
        }
        Err(_) => {
            warn!(%static_dir, "frontend assets directory not found; static assets will 404");
            return Ok(false);
        }
    }

    let index = Path::new(static_dir).join("index.html");
    if tokio::fs::metadata(&index).await.is_err() {
        warn!(index = %index.display(), "index.html missing; root redirect will land on a 404");
        return Ok(false);
    }
    info!(%static_dir, "frontend assets directory found");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_dir_is_not_fatal() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("static_missing_{}", uuid::Uuid::new_v4()));
        let found = ensure_static_dir(dir.to_str().unwrap()).await?;
        assert!(!found);
        Ok(())
    }

    #[tokio::test]
    async fn dir_with_index_is_found() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("static_ok_{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join("index.html"), "<html></html>").await?;

        let found = ensure_static_dir(dir.to_str().unwrap()).await?;
        assert!(found);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn file_instead_of_dir_is_an_error() -> anyhow::Result<()> {
        let file = std::env::temp_dir().join(format!("static_file_{}", uuid::Uuid::new_v4()));
        tokio::fs::write(&file, "x").await?;

        assert!(ensure_static_dir(file.to_str().unwrap()).await.is_err());

        let _ = tokio::fs::remove_file(&file).await;
        Ok(())
    }
}
