//! Tests for error handling under adverse filesystem conditions

use aav_fs::{Error, NormalizedPath, io};
use tempfile::tempdir;

#[test]
fn read_text_nonexistent_file_is_not_found() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("does_not_exist.vm"));

    let err = io::read_text(&path).unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err}");
}

#[test]
fn write_text_to_nonexistent_parent_creates_directories() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("Query").join("getUser").join("request.vm"));

    io::write_text(&path, "{}").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "{}");
}

#[test]
fn write_atomic_leaves_no_temp_files() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("meta.json"));

    io::write_text(&path, "{}").unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[test]
fn read_json_reports_parse_errors_with_path() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("meta.json"));
    std::fs::write(path.to_native(), "{ not json").unwrap();

    let err = io::read_json::<serde_json::Value>(&path).unwrap_err();
    assert!(matches!(err, Error::JsonParse { .. }));
    assert!(err.to_string().contains("meta.json"));
}

#[test]
fn remove_empty_dir_refuses_non_empty_directory() {
    let dir = tempdir().unwrap();
    let type_dir = dir.path().join("Query");
    std::fs::create_dir_all(type_dir.join("getUser")).unwrap();

    let result = io::remove_empty_dir(&NormalizedPath::new(&type_dir));
    assert!(result.is_err());
    assert!(type_dir.exists());
}

#[test]
fn list_dir_names_on_file_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("request.vm");
    std::fs::write(&file, "{}").unwrap();

    assert!(io::list_dir_names(&NormalizedPath::new(&file)).is_err());
}

#[cfg(unix)]
#[test]
fn exists_propagates_errors_other_than_not_found() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("request.vm");
    std::fs::write(&file, "{}").unwrap();

    // A path component that is a regular file yields ENOTDIR, not ENOENT.
    let path = NormalizedPath::new(file.join("meta.json"));
    let result = io::exists(&path);
    assert!(result.is_err(), "expected error, got {result:?}");
}
