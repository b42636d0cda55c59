//! On-disk layout of a resolvers tree
//!
//! ```text
//! <root>/<TypeName>/<fieldName>/request.vm
//!                              /response.vm
//!                              /meta.json
//! ```

use std::path::Path;

use crate::{NormalizedPath, ResolverFile, Result, io};

/// Path computation and listing for a resolvers root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverLayout {
    root: NormalizedPath,
}

impl ResolverLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: NormalizedPath::new(root),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// `<root>/<type_name>`
    pub fn type_dir(&self, type_name: &str) -> NormalizedPath {
        self.root.join(type_name)
    }

    /// `<root>/<type_name>/<field_name>`
    pub fn resolver_dir(&self, type_name: &str, field_name: &str) -> NormalizedPath {
        self.type_dir(type_name).join(field_name)
    }

    /// Path of one file inside a resolver directory.
    pub fn file(&self, type_name: &str, field_name: &str, file: ResolverFile) -> NormalizedPath {
        self.resolver_dir(type_name, field_name).join(file.as_str())
    }

    /// Type directories present under the root.
    ///
    /// Fails if the root does not exist.
    pub fn list_types(&self) -> Result<Vec<String>> {
        io::list_subdir_names(&self.root)
    }

    /// Resolver directories present under a type directory.
    pub fn list_fields(&self, type_name: &str) -> Result<Vec<String>> {
        io::list_subdir_names(&self.type_dir(type_name))
    }
}
