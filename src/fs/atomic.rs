//! Atomic file writes for the generated page.
//!
//! All writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Atomically replace the target file
//!
//! On POSIX, `rename()` is atomic when source and destination share a
//! filesystem; the temp file is created next to the target to guarantee
//! that. On crash, a leftover `.{filename}.tmp` may remain.

use crate::error::{Result, TabimapError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, overwriting any existing file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| write_error(path, "create parent directory", e))?;
    }

    let temp_path = generate_temp_path(path)?;

    write_and_sync(&temp_path, path, content.as_bytes())?;

    atomic_replace(&temp_path, path)?;

    Ok(())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TabimapError::Write {
            path: target.display().to_string(),
            message: "invalid file path".to_string(),
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to the temp file and sync it to disk.
fn write_and_sync(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        File::create(temp_path).map_err(|e| write_error(target, "create temporary file", e))?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        write_error(target, "write temporary file", e)
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(temp_path);
        write_error(target, "sync temporary file", e)
    })?;

    Ok(())
}

/// Atomically replace the target file with the temp file.
#[cfg(unix)]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    // On POSIX, rename() is atomic and replaces the destination if it exists
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        write_error(target, "replace", e)
    })?;

    // Sync the parent directory so the new entry is durable
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Best-effort replace for non-POSIX targets: remove then rename.
#[cfg(not(unix))]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            write_error(target, "remove existing file before replace", e)
        })?;
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        write_error(target, "replace", e)
    })
}

fn write_error(target: &Path, action: &str, e: std::io::Error) -> TabimapError {
    TabimapError::Write {
        path: target.display().to_string(),
        message: format!("failed to {}: {}", action, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("index.html");

        atomic_write_file(&file_path, "<!DOCTYPE html>").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "<!DOCTYPE html>");
    }

    #[test]
    fn replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("index.html");

        fs::write(&file_path, "old page").unwrap();
        atomic_write_file(&file_path, "new page").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "new page");
    }

    #[test]
    fn creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("docs").join("out").join("index.html");

        atomic_write_file(&file_path, "nested").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "nested");
    }

    #[test]
    fn cleans_up_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("index.html");

        atomic_write_file(&file_path, "page").unwrap();

        let temp_path = temp_dir.path().join(".index.html.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn preserves_multibyte_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("index.html");

        let content = "<h2>日本地図へようこそ</h2>";
        atomic_write_file(&file_path, content).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), content);
    }

    #[test]
    fn temp_path_sits_next_to_target() {
        let target = Path::new("/some/path/index.html");
        let temp = generate_temp_path(target).unwrap();

        assert_eq!(temp.parent().unwrap(), Path::new("/some/path"));
        let name = temp.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with('.'));
        assert!(name.ends_with(".tmp"));
    }
}
