use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "FOLIO_BIND_ADDR";
pub const LOGO_PATH_VAR: &str = "FOLIO_LOGO_PATH";
pub const MAX_UPLOAD_BYTES_VAR: &str = "FOLIO_MAX_UPLOAD_BYTES";
pub const LOG_FORMAT_VAR: &str = "FOLIO_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
const DEFAULT_LOGO_PATH: &str = "logo.png";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind_addr: SocketAddr,
    /// Logo drawn on every report page. Relative paths resolve against the
    /// working directory.
    pub logo_path: PathBuf,
    pub max_upload_bytes: usize,
    pub log_format: LogFormat,
}

impl WebConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    /// Unset or empty variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = var(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid {BIND_ADDR_VAR}: {e}"))?;

        let logo_path = var(LOGO_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGO_PATH));

        let max_upload_bytes = match var(MAX_UPLOAD_BYTES_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("invalid {MAX_UPLOAD_BYTES_VAR}: {e}"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let log_format = match var(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid {LOG_FORMAT_VAR}: {other} (expected \"text\" or \"json\")"
                ));
            }
        };

        Ok(Self {
            bind_addr,
            logo_path,
            max_upload_bytes,
            log_format,
        })
    }
}
