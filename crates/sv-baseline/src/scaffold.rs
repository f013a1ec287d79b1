//! Visual spec scaffolding, runner config generation, and snapshot listing.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::WriteOutcome;
use crate::error::BaselineError;

/// Spec name and route for each scaffolded page.
pub const SPEC_ROUTES: [(&str, &str); 3] =
    [("home", "/"), ("healthz", "/healthz"), ("atoms", "/atoms")];

fn spec_source(name: &str, route: &str) -> String {
    format!(
        r#"import {{ test, expect }} from "@playwright/test";
test("{name} matches baseline", async ({{ page }}) => {{
  await page.goto("{route}");
  await page.waitForLoadState("networkidle");
  await expect(page).toHaveScreenshot("{name}.png", {{ maxDiffPixelRatio: 0.01 }});
}});
"#
    )
}

/// Write one minimal spec per route in [`SPEC_ROUTES`] unless the spec
/// directory already exists. An existing directory is left untouched,
/// whatever it holds, so hand-written specs survive reruns.
///
/// # Errors
///
/// Returns [`BaselineError::Io`] if the directory or a spec cannot be
/// written.
pub fn ensure_visual_specs(visual_dir: &Path) -> Result<WriteOutcome, BaselineError> {
    if visual_dir.exists() {
        return Ok(WriteOutcome::Existing);
    }
    fs::create_dir_all(visual_dir)?;
    for (name, route) in SPEC_ROUTES {
        fs::write(
            visual_dir.join(format!("{name}.spec.ts")),
            spec_source(name, route),
        )?;
    }
    tracing::debug!(dir = %visual_dir.display(), count = SPEC_ROUTES.len(), "wrote visual specs");
    Ok(WriteOutcome::Created)
}

/// Write the throwaway Playwright config pointed at an already-running
/// local server. Always overwrites; the file is generated per run and not
/// meant to be committed.
///
/// `visual_dir` is the spec directory relative to the repo root, since the
/// config sits at the root and `testDir` resolves from there.
///
/// # Errors
///
/// Returns [`BaselineError::Io`] if the config cannot be written.
pub fn write_runner_config(
    config_path: &Path,
    visual_dir: &Path,
    port: u16,
) -> Result<(), BaselineError> {
    let content = format!(
        r#"import {{ defineConfig }} from "@playwright/test";
export default defineConfig({{
  testDir: "./{test_dir}",
  // Visual tests expect the server to be started separately.
  webServer: undefined,
  use: {{
    baseURL: "http://localhost:{port}",
    headless: true,
    trace: "retain-on-failure"
  }},
  retries: 0
}});
"#,
        test_dir = visual_dir.display()
    );
    fs::write(config_path, content)?;
    tracing::debug!(path = %config_path.display(), port, "wrote runner config");
    Ok(())
}

/// List every `*.png` directly inside a `*-snapshots` directory under the
/// spec dir, sorted. A missing spec dir yields an empty listing.
#[must_use]
pub fn collect_baseline_snapshots(visual_dir: &Path) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(visual_dir);
    builder.standard_filters(false).hidden(false);

    let mut snapshots = Vec::new();
    for entry in builder.build() {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let in_snapshots_dir = path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|name| name.to_string_lossy().ends_with("-snapshots"));
        if in_snapshots_dir && path.extension().is_some_and(|ext| ext == "png") {
            snapshots.push(path);
        }
    }
    snapshots.sort();
    tracing::debug!(count = snapshots.len(), "collected baseline snapshots");
    snapshots
}
