//! File and directory operations used by the synchronizer

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use fs2::FileExt;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result};

/// Check whether a path exists.
///
/// A missing path yields `Ok(false)`. Any other failure (permissions, a
/// broken mount) is returned as an error instead of being read as "absent".
pub fn exists(path: &NormalizedPath) -> Result<bool> {
    match fs::metadata(path.to_native()) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path.to_native(), e)),
    }
}

/// Create a directory and its parents if missing.
///
/// Returns `true` when the directory had to be created.
pub fn ensure_dir(path: &NormalizedPath) -> Result<bool> {
    if exists(path)? {
        return Ok(false);
    }
    tracing::debug!(path = %path, "Creating directory");
    fs::create_dir_all(path.to_native()).map_err(|e| Error::io(path.to_native(), e))?;
    Ok(true)
}

/// List the entry names directly under a directory, sorted.
pub fn list_dir_names(path: &NormalizedPath) -> Result<Vec<String>> {
    let native = path.to_native();
    let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// List the names of the directories directly under a directory, sorted.
///
/// Plain files (editor swap files, `.DS_Store`) are left out.
pub fn list_subdir_names(path: &NormalizedPath) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for name in list_dir_names(path)? {
        let child = path.join(&name);
        let metadata =
            fs::metadata(child.to_native()).map_err(|e| Error::io(child.to_native(), e))?;
        if metadata.is_dir() {
            names.push(name);
        } else {
            tracing::debug!(path = %child, "Skipping non-directory entry");
        }
    }
    Ok(names)
}

/// Write content atomically to a file with locking.
///
/// Writes to a temp file in the same directory, then renames over the target.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
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

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

    let written = temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    drop(temp_file);

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read a UTF-8 text file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Replace the whole content of a text file.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    tracing::debug!(path = %path, bytes = content.len(), "Writing file");
    write_atomic(path, content.as_bytes())
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &NormalizedPath) -> Result<T> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| Error::JsonParse {
        path: path.to_native(),
        source,
    })
}

/// Serialize a value as 2-space indented JSON and write it.
pub fn write_json_pretty<T: Serialize>(path: &NormalizedPath, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(|source| Error::JsonWrite {
        path: path.to_native(),
        source,
    })?;
    write_text(path, &content)
}

/// Remove a directory and everything under it.
pub fn remove_dir_all(path: &NormalizedPath) -> Result<()> {
    tracing::debug!(path = %path, "Removing directory tree");
    fs::remove_dir_all(path.to_native()).map_err(|e| Error::io(path.to_native(), e))
}

/// Remove a directory that must already be empty.
pub fn remove_empty_dir(path: &NormalizedPath) -> Result<()> {
    tracing::debug!(path = %path, "Removing empty directory");
    fs::remove_dir(path.to_native()).map_err(|e| Error::io(path.to_native(), e))
}
