use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Write a file by writing a sibling temporary file first and renaming it over `path`,
/// so a crash never leaves a half-written settings file behind.
///
/// ### Arguments
/// - `path`: the path to the file to write
/// - `contents`: the content to write in the file
///
/// ### Return
/// - `Ok(())`: the write is successful
/// - `Err()`: error while writing the file
pub fn atomic_write_file(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("'{}' has no parent directory", path.display()))?;
    let filename = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("'{}' has no filename", path.display()))?;
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    let tmp_path = parent.join(format!(
        ".{}.{}.{}.tmp",
        filename.to_string_lossy(),
        std::process::id(),
        nonce
    ));
    let result = write_and_rename(&tmp_path, path, contents);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_rename(tmp_path: &Path, path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let mut tmp_file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(tmp_path)
        .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", tmp_path.display(), e))?;
    tmp_file
        .write_all(contents)
        .and_then(|()| tmp_file.sync_all())
        .map_err(|e| anyhow::anyhow!("Failed to write '{}': {}", tmp_path.display(), e))?;
    fs::rename(tmp_path, path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to replace '{}' with '{}': {}",
            path.display(),
            tmp_path.display(),
            e
        )
    })?;
    Ok(())
}
