//! Text I/O, atomic writes with file locking, and modification times

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::time::SystemTime;

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock on the temp file while writing.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;

    Ok(())
}

/// Read the whole file as UTF-8 text.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Last modification time of a file.
pub fn modified(path: &NormalizedPath) -> Result<SystemTime> {
    let native_path = path.to_native();
    fs::metadata(&native_path)
        .and_then(|meta| meta.modified())
        .map_err(|e| Error::io(&native_path, e))
}

/// Whether the file was modified strictly after `since`.
///
/// A file that can no longer be inspected (deleted, unreadable) counts
/// as changed.
pub fn has_changed_since(path: &NormalizedPath, since: SystemTime) -> bool {
    modified(path).map(|mtime| mtime > since).unwrap_or(true)
}
