//! One-shot scaffolding for a Playwright visual-regression baseline.
//!
//! Prepares a Next.js monorepo for screenshot capture: placeholder env
//! file, minimal visual specs, a throwaway runner config pointed at a free
//! local port, and the listing of produced snapshots. Process orchestration
//! (npm, npx) lives in [`process`]; the CLI drives the steps and prints the
//! progress log.

pub mod env_file;
pub mod error;
pub mod ports;
pub mod process;
pub mod scaffold;

use std::path::{Path, PathBuf};

pub use env_file::{ENV_LOCAL_CONTENTS, ensure_env_local};
pub use error::BaselineError;
pub use ports::find_free_port;
pub use process::{command_line, run_streamed};
pub use scaffold::{
    SPEC_ROUTES, collect_baseline_snapshots, ensure_visual_specs, write_runner_config,
};

/// Whether a scaffolding step created its target or found it in place.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteOutcome {
    Created,
    Existing,
}

/// Verify the repo looks like the expected npm monorepo before touching
/// anything: a `package.json` at the root and the app workspace directory.
///
/// # Errors
///
/// Returns [`BaselineError::PackageJsonMissing`] or
/// [`BaselineError::AppDirMissing`] naming what is absent.
pub fn check_web_workspace(root: &Path, app_dir: &Path) -> Result<(), BaselineError> {
    if !root.join("package.json").exists() {
        return Err(BaselineError::PackageJsonMissing);
    }
    if !root.join(app_dir).exists() {
        return Err(BaselineError::AppDirMissing(app_dir.to_path_buf()));
    }
    Ok(())
}

/// Path of the standalone server entry produced by `next build` with
/// `output: "standalone"`.
#[must_use]
pub fn standalone_server_path(root: &Path, app_dir: &Path) -> PathBuf {
    root.join(app_dir)
        .join(".next")
        .join("standalone")
        .join("server.js")
}
