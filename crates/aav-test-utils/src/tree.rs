//! [`TestResolvers`] builder for synchronizer scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use aav_appsync::Resolver;
use aav_core::SyncConfig;
use aav_fs::ResolverFile;
use tempfile::TempDir;

/// A temporary resolvers root with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use aav_fs::ResolverFile;
/// use aav_test_utils::TestResolvers;
///
/// let tree = TestResolvers::new();
/// tree.write(ResolverFile::RequestTemplate, "Query", "getUser", "{}");
/// tree.assert_file_exists("Query/getUser/request.vm");
/// ```
pub struct TestResolvers {
    temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestResolvers {
    fn default() -> Self {
        Self::new()
    }
}

impl TestResolvers {
    /// An empty resolvers root that already exists.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("resolvers");
        fs::create_dir(&root).unwrap();
        Self { temp_dir, root }
    }

    /// A root path that does not exist yet (its parent does).
    pub fn missing_root() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("resolvers");
        Self { temp_dir, root }
    }

    /// The resolvers root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The temporary directory holding the root.
    pub fn sandbox(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A [`SyncConfig`] pointing at this root.
    pub fn config(&self, api_id: &str) -> SyncConfig {
        SyncConfig::new(api_id, self.root.to_string_lossy()).unwrap()
    }

    /// Write one file of a resolver directory, creating directories.
    pub fn write(&self, file: ResolverFile, type_name: &str, field_name: &str, content: &str) {
        let dir = self.root.join(type_name).join(field_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file.as_str()), content).unwrap();
    }

    /// Write a `meta.json` holding `resolver`, pretty-printed.
    pub fn write_meta(&self, resolver: &Resolver) {
        let json = serde_json::to_string_pretty(resolver).unwrap();
        self.write(
            ResolverFile::Meta,
            &resolver.type_name,
            &resolver.field_name,
            &json,
        );
    }

    /// Create an empty directory below the root.
    pub fn mkdir(&self, path: &str) {
        fs::create_dir_all(self.root.join(path)).unwrap();
    }

    /// Read a file below the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root.join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Parse `<Type>/<field>/meta.json`.
    pub fn read_meta(&self, type_name: &str, field_name: &str) -> Resolver {
        let content = self.read(&format!("{type_name}/{field_name}/meta.json"));
        serde_json::from_str(&content).unwrap()
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to the root) equals `content`.
    pub fn assert_file_eq(&self, path: &str, content: &str) {
        let actual = self.read(path);
        assert_eq!(
            actual, content,
            "File {path} does not hold the expected content"
        );
    }

    /// Every file and directory below the root, as sorted relative paths.
    pub fn listing(&self) -> Vec<String> {
        fn walk(dir: &Path, prefix: &str, out: &mut Vec<String>) {
            let mut entries: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap()).collect();
            entries.sort_by_key(|e| e.file_name());
            for entry in entries {
                let name = entry.file_name().to_string_lossy().into_owned();
                let rel = if prefix.is_empty() {
                    name
                } else {
                    format!("{prefix}/{name}")
                };
                out.push(rel.clone());
                if entry.path().is_dir() {
                    walk(&entry.path(), &rel, out);
                }
            }
        }

        let mut out = Vec::new();
        if self.root.exists() {
            walk(&self.root, "", &mut out);
        }
        out
    }
}
