use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Failure to locate, read or validate the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot locate config directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid TOML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Per-request settings (optional `[fetch]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds; 0 disables it.
    pub timeout_secs: u64,
    /// Connect timeout in seconds; 0 leaves libcurl's default.
    pub connect_timeout_secs: u64,
    /// Verify TLS certificates. Off by default.
    pub verify_tls: bool,
    /// Maximum redirects followed per request.
    pub max_redirections: u32,
    /// Optional `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 15,
            verify_tls: false,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/urlsift/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlsiftConfig {
    /// Number of concurrent workers.
    pub concurrency: usize,
    /// Do not print per-URL error lines.
    pub suppress_errors: bool,
    pub fetch: FetchConfig,
}

impl Default for UrlsiftConfig {
    fn default() -> Self {
        Self {
            concurrency: 1,
            suppress_errors: false,
            fetch: FetchConfig::default(),
        }
    }
}

impl UrlsiftConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid("concurrency must be at least 1".into()));
        }
        Ok(())
    }
}

/// Existing config file under the XDG config home, if any.
pub fn config_path() -> Result<Option<PathBuf>, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsift")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load the default config file, or built-in defaults if there is none.
/// Never writes to disk.
pub fn load_or_default() -> Result<UrlsiftConfig, ConfigError> {
    match config_path()? {
        Some(path) => load_from_path(&path),
        None => Ok(UrlsiftConfig::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<UrlsiftConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: UrlsiftConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
