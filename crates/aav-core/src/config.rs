//! Synchronizer configuration

use aav_fs::NormalizedPath;

use crate::{Error, Result};

/// Name of the variable holding the API id.
pub const API_ID_VAR: &str = "API_ID";
/// Name of the variable holding the resolvers root.
pub const RESOLVERS_PATH_VAR: &str = "RESOLVERS_PATH";

/// Immutable settings of a [`Synchronizer`](crate::Synchronizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    api_id: String,
    resolvers_root: NormalizedPath,
}

impl SyncConfig {
    /// Build a configuration, rejecting empty values.
    pub fn new(api_id: impl Into<String>, resolvers_root: impl AsRef<str>) -> Result<Self> {
        Self::from_values(Some(api_id.into()), Some(resolvers_root.as_ref().to_string()))
    }

    /// Build a configuration from optional raw values, as read from flags or
    /// the environment.
    ///
    /// The API id is checked first, so with both missing the error names
    /// `API_ID`.
    pub fn from_values(api_id: Option<String>, resolvers_path: Option<String>) -> Result<Self> {
        let api_id = api_id
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingConfig { name: API_ID_VAR })?;
        let resolvers_path = resolvers_path
            .filter(|v| !v.trim().is_empty())
            .ok_or(Error::MissingConfig {
                name: RESOLVERS_PATH_VAR,
            })?;

        Ok(Self {
            api_id,
            resolvers_root: NormalizedPath::new(resolvers_path),
        })
    }

    pub fn api_id(&self) -> &str {
        &self.api_id
    }

    pub fn resolvers_root(&self) -> &NormalizedPath {
        &self.resolvers_root
    }
}
