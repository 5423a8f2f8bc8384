//! Atomic file writes using a temp-and-rename strategy.
//!
//! A manifest is either fully written or left untouched; an interrupted or
//! failed run never leaves half a file behind for later build steps.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::dirs::ensure_parent_dir;

/// Write `content` to `path`, creating parent directories as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_path = temp_path_for(path);

    let written = (|| -> Result<()> {
        let mut file = fs::File::create(&temp_path).with_context(|| {
            format!(
                "Failed to create temp file: {}\n\nCheck file permissions and that directory exists",
                temp_path.display()
            )
        })?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))
    })();

    if written.is_err() {
        // Best effort; the original error is what matters.
        let _ = fs::remove_file(&temp_path);
    }

    written
}

/// `<dir>/.<file name>.tmp`, next to the target so the rename stays on one
/// filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name =
        path.file_name().map_or_else(|| "output".into(), |name| name.to_string_lossy());
    path.with_file_name(format!(".{file_name}.tmp"))
}
