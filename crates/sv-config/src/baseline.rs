//! Visual-baseline orchestrator configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default Next.js app workspace, relative to the repo root.
fn default_app_dir() -> PathBuf {
    PathBuf::from("apps/web")
}

/// Default visual spec directory, relative to the repo root.
fn default_visual_dir() -> PathBuf {
    PathBuf::from("e2e/visual")
}

/// Default name of the generated Playwright config at the repo root.
fn default_config_name() -> String {
    String::from(".playwright.visual.local.config.ts")
}

/// First port probed for the local server.
const fn default_port_start() -> u16 {
    3010
}

/// How many consecutive ports to probe.
const fn default_port_span() -> u16 {
    50
}

/// Pinned `@playwright/test` / `playwright` version.
fn default_playwright_version() -> String {
    String::from("1.48.0")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BaselineConfig {
    /// Next.js app workspace directory.
    #[serde(default = "default_app_dir")]
    pub app_dir: PathBuf,

    /// Directory holding the visual specs and their `-snapshots` output.
    #[serde(default = "default_visual_dir")]
    pub visual_dir: PathBuf,

    /// File name of the generated Playwright config, written at the repo root.
    #[serde(default = "default_config_name")]
    pub config_name: String,

    /// First candidate port for the local server.
    #[serde(default = "default_port_start")]
    pub port_start: u16,

    /// Number of consecutive ports probed before giving up.
    #[serde(default = "default_port_span")]
    pub port_span: u16,

    /// Pinned `@playwright/test` version used to run the specs.
    #[serde(default = "default_playwright_version")]
    pub runner_version: String,

    /// Pinned `playwright` version used to install browsers.
    #[serde(default = "default_playwright_version")]
    pub browsers_version: String,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            visual_dir: default_visual_dir(),
            config_name: default_config_name(),
            port_start: default_port_start(),
            port_span: default_port_span(),
            runner_version: default_playwright_version(),
            browsers_version: default_playwright_version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = BaselineConfig::default();
        assert_eq!(config.app_dir, PathBuf::from("apps/web"));
        assert_eq!(config.visual_dir, PathBuf::from("e2e/visual"));
        assert_eq!(config.config_name, ".playwright.visual.local.config.ts");
        assert_eq!(config.port_start, 3010);
        assert_eq!(config.port_span, 50);
        assert_eq!(config.runner_version, "1.48.0");
        assert_eq!(config.browsers_version, "1.48.0");
    }
}
