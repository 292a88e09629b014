use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use tracing::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.into(), port: DEFAULT_PORT, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self { static_dir: default_static_dir() }
    }
}

fn default_static_dir() -> String { DEFAULT_STATIC_DIR.to_string() }

/// Where the config file lives: `CONFIG_PATH` or `config.toml`.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

/// Which source `AppConfig::load_or_env_at` ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Env,
    /// The file exists but failed to parse or validate.
    InvalidFile,
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Build a config purely from `SERVER_HOST`, `SERVER_PORT` and `STATIC_DIR`,
    /// used when no config file is present.
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .filter(|p| *p != 0)
            .unwrap_or(DEFAULT_PORT);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir());
        Self {
            server: ServerConfig { host, port, worker_threads },
            frontend: FrontendConfig { static_dir },
        }
    }

    /// Config file first, environment second.
    pub fn load_or_env() -> Self {
        Self::load_or_env_at(&config_path()).0
    }

    /// A missing file silently selects the environment; a file that exists
    /// but is broken is logged before falling back.
    pub fn load_or_env_at(path: &str) -> (Self, ConfigSource) {
        if !Path::new(path).exists() {
            return (Self::env_fallback(), ConfigSource::Env);
        }
        let loaded = load_from_file(path).and_then(|mut cfg| {
            cfg.normalize_and_validate()?;
            Ok(cfg)
        });
        match loaded {
            Ok(cfg) => (cfg, ConfigSource::File),
            Err(e) => {
                warn!(%path, error = %e, "config file invalid; falling back to environment");
                (Self::env_fallback(), ConfigSource::InvalidFile)
            }
        }
    }

    fn env_fallback() -> Self {
        let mut cfg = Self::from_env();
        // from_env 已过滤端口 0，这里仅做归一化
        let _ = cfg.normalize_and_validate();
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.frontend.normalize();
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl FrontendConfig {
    fn normalize(&mut self) {
        let trimmed = self.static_dir.trim().trim_end_matches('/');
        self.static_dir = if trimmed.is_empty() { default_static_dir() } else { trimmed.to_string() };
    }
}
