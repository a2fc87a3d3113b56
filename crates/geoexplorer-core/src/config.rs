// crates/geoexplorer-core/src/config.rs

use crate::alias::AliasTable;
use crate::error::{GeoError, Result};
use crate::source::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "GEOEXPLORER_BASE_URL";
pub const ENV_ALIASES: &str = "GEOEXPLORER_ALIASES";
pub const ENV_TIMEOUT_SECS: &str = "GEOEXPLORER_TIMEOUT_SECS";
pub const ENV_DATASET_TTL_SECS: &str = "GEOEXPLORER_DATASET_TTL_SECS";

/// Runtime settings for a resolver session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Root of the REST Countries API, without the `/v3.1` prefix.
    pub base_url: String,
    /// Alias asset to use instead of the embedded French table.
    pub aliases_path: Option<PathBuf>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    /// How long a fetched `/all` dataset may be reused. `None` refetches on every fallback.
    pub dataset_ttl_secs: Option<u64>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            aliases_path: None,
            timeout_secs: None,
            dataset_ttl_secs: None,
        }
    }
}

impl ExplorerConfig {
    /// Defaults overridden by `GEOEXPLORER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ExplorerConfig::from_env`] but with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            cfg.base_url = url.trim().to_string();
        }
        if let Some(path) = lookup(ENV_ALIASES).filter(|v| !v.trim().is_empty()) {
            cfg.aliases_path = Some(PathBuf::from(path.trim()));
        }
        cfg.timeout_secs = parse_secs(ENV_TIMEOUT_SECS, lookup(ENV_TIMEOUT_SECS))?;
        cfg.dataset_ttl_secs = parse_secs(ENV_DATASET_TTL_SECS, lookup(ENV_DATASET_TTL_SECS))?;

        Ok(cfg)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn dataset_ttl(&self) -> Option<Duration> {
        self.dataset_ttl_secs.map(Duration::from_secs)
    }

    /// The configured alias asset, or the embedded French table.
    pub fn load_aliases(&self) -> Result<AliasTable> {
        match &self.aliases_path {
            Some(path) => AliasTable::load_from_path(path),
            None => Ok(AliasTable::french()),
        }
    }
}

fn parse_secs(key: &str, value: Option<String>) -> Result<Option<u64>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<u64>()
            .map(Some)
            .map_err(|_| GeoError::InvalidData(format!("{key} must be a whole number of seconds, got {v:?}"))),
    }
}
