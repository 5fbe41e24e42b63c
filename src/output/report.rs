// Saved feedback file — the combined feedback and score as plain text.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::review::ReviewReport;

/// Write the report's feedback and score to `path`, creating parent directories.
///
/// Returns the path written.
pub fn save_feedback(report: &ReviewReport, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, report.download_text())
        .with_context(|| format!("Failed to write feedback to {}", path.display()))?;

    info!(path = %path.display(), "Saved feedback");
    Ok(path.to_path_buf())
}
