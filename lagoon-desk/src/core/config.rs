//! Desk configuration
//!
//! Read from the environment (after `.env` is loaded). CLI flags override
//! individual values in `main`.

use std::path::PathBuf;

use lagoon_client::ClientConfig;

use super::error::{DeskError, DeskResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_WORK_DIR: &str = "./.lagoon";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// REST API base URL
    pub api_url: String,
    /// Bearer token
    pub api_token: Option<String>,
    /// Sent as `X-CSRF-TOKEN` on writes
    pub csrf_token: Option<String>,
    /// Logs and navigation memory live here
    pub work_dir: PathBuf,
    pub timeout_secs: u64,
    /// Stamp list fetches with `_t=<millis>`
    pub cache_bust: bool,
    /// Fill lists with sample rows when a fetch fails
    pub sample_fallback: bool,
    /// Log filter from `LAGOON_LOG` (`RUST_LOG` still wins)
    pub log_filter: Option<String>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            csrf_token: None,
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_bust: true,
            sample_fallback: false,
            log_filter: None,
        }
    }
}

impl DeskConfig {
    /// Load `.env` if present; a missing file is not an error
    pub fn load_dotenv() {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => eprintln!("warning: ignoring unreadable .env: {e}"),
        }
    }

    pub fn from_env() -> DeskResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset and blank values take the default
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> DeskResult<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Ok(Self {
            api_url: get("LAGOON_API_URL").unwrap_or(defaults.api_url),
            api_token: get("LAGOON_API_TOKEN"),
            csrf_token: get("LAGOON_CSRF_TOKEN"),
            work_dir: get("LAGOON_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.work_dir),
            timeout_secs: match get("LAGOON_TIMEOUT_SECS") {
                Some(raw) => parse_var("LAGOON_TIMEOUT_SECS", &raw)?,
                None => defaults.timeout_secs,
            },
            cache_bust: match get("LAGOON_CACHE_BUST") {
                Some(raw) => parse_flag("LAGOON_CACHE_BUST", &raw)?,
                None => defaults.cache_bust,
            },
            sample_fallback: match get("LAGOON_SAMPLE_FALLBACK") {
                Some(raw) => parse_flag("LAGOON_SAMPLE_FALLBACK", &raw)?,
                None => defaults.sample_fallback,
            },
            log_filter: get("LAGOON_LOG"),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.api_url)
            .with_timeout(self.timeout_secs)
            .with_cache_bust(self.cache_bust);
        if let Some(token) = &self.api_token {
            config = config.with_token(token);
        }
        if let Some(csrf) = &self.csrf_token {
            config = config.with_csrf_token(csrf);
        }
        config
    }

    pub fn nav_path(&self) -> PathBuf {
        self.work_dir.join("nav.json")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.work_dir.join("logs")
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> DeskResult<T> {
    raw.parse()
        .map_err(|_| DeskError::Config(format!("{key}: cannot parse {raw:?}")))
}

fn parse_flag(key: &str, raw: &str) -> DeskResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DeskError::Config(format!("{key}: expected true or false, got {raw:?}"))),
    }
}
