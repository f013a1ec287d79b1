//! # sv-config
//!
//! Layered configuration loading for svo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SVO_*` prefix, `__` as separator)
//! 2. Project-level `svo.toml`
//! 3. User-level `~/.config/svo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SVO_SMOKE__PROCESSED_DIR` -> `smoke.processed_dir`,
//! `SVO_BASELINE__PORT_START` -> `baseline.port_start`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sv_config::SvConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = SvConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = SvConfig::load().expect("config");
//!
//! println!("scanning {}", config.smoke.processed_dir.display());
//! ```

mod baseline;
mod error;
mod smoke;

pub use baseline::BaselineConfig;
pub use error::ConfigError;
pub use smoke::SmokeConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SvConfig {
    #[serde(default)]
    pub smoke: SmokeConfig,
    #[serde(default)]
    pub baseline: BaselineConfig,
}

impl SvConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`SvConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`SVO_*` prefix)
    /// 2. `svo.toml` (project-local)
    /// 3. `~/.config/svo/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or merge.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or merge.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("svo.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SVO_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("svo").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        // In tests/build: CARGO_MANIFEST_DIR points to the crate dir.
        // Walk up to find workspace root's .env.
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SvConfig::default();
        assert_eq!(config.smoke.processed_dir, PathBuf::from("data/processed"));
        assert!(config.smoke.json_report.is_none());
        assert_eq!(config.baseline.port_start, 3010);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = Figment::from(Serialized::defaults(SvConfig::default()))
            .merge(Env::prefixed("SVO_").split("__"));
        let config: SvConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.smoke.sql, PathBuf::from("duckdb/smoke_rowcount.sql"));
        assert_eq!(config.baseline.port_span, 50);
    }
}
