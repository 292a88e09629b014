use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::{roster::InMemoryRoster, runtime};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_from_env();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

/// Seed a fresh roster and wire it into the router.
pub fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let roster = InMemoryRoster::seeded().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let state = AppState { roster };
    Ok(routes::build_router(state, build_cors(), &cfg.frontend.static_dir))
}

/// Serve `app` on an already-bound listener until Ctrl+C.
pub async fn serve(listener: tokio::net::TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // 优先使用 config.toml，缺失时回退到环境变量
    let cfg = AppConfig::load_or_env();
    runtime::ensure_env(&cfg.frontend.static_dir).await?;

    let app = build_app(&cfg)?;

    let addr = load_bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, static_dir = %cfg.frontend.static_dir, "starting activities server");
    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_defaults_parses() {
        let cfg = AppConfig::default();
        let addr = load_bind_addr(&cfg).unwrap();
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn hostname_bind_addr_is_invalid_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(load_bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn seeded_app_builds() {
        assert!(build_app(&AppConfig::default()).is_ok());
    }
}
