//! Placeholder `.env.local` for the Next.js app.

use std::fs;
use std::path::{Path, PathBuf};

use crate::WriteOutcome;
use crate::error::BaselineError;

/// Contents written when `.env.local` is absent. Placeholder values only;
/// the visual build must not talk to real services.
pub const ENV_LOCAL_CONTENTS: &str = "NEXT_PUBLIC_APP_NAME=Summa Vision\n\
NEXT_PUBLIC_API_BASE_URL=https://example.invalid\n\
NEXT_PUBLIC_SITE_URL=http://localhost:3000\n";

/// Make sure `{app_dir}/.env.local` exists, creating it with placeholder
/// values when absent. An existing file is never touched.
///
/// # Errors
///
/// Returns [`BaselineError::Io`] if the directory or file cannot be written.
pub fn ensure_env_local(app_dir: &Path) -> Result<(PathBuf, WriteOutcome), BaselineError> {
    fs::create_dir_all(app_dir)?;
    let env_local = app_dir.join(".env.local");
    if env_local.exists() {
        return Ok((env_local, WriteOutcome::Existing));
    }
    fs::write(&env_local, ENV_LOCAL_CONTENTS)?;
    Ok((env_local, WriteOutcome::Created))
}
