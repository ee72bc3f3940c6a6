//! Output file handling.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write `path` through a sibling temp file that is renamed into place.
///
/// The temp file is removed again if `write` fails, so the destination is
/// either untouched or complete.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    let tmp_path = tmp_path_for(path);
    let result = write_and_commit(path, &tmp_path, write);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_commit<F>(path: &Path, tmp_path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = File::create(tmp_path)
        .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    drop(writer);

    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove existing {}", path.display()))?;
    }

    fs::rename(tmp_path, path).with_context(|| format!("Failed to commit {}", path.display()))?;
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
