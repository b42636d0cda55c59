//! Typed view of `meta.json`

use aav_appsync::Resolver;
use aav_fs::{NormalizedPath, io};

use crate::Result;

/// The last-known remote state of a resolver, as stored in `meta.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSnapshot {
    pub resolver: Resolver,
}

impl ResolverSnapshot {
    /// Load the snapshot at `path`; a missing file means `None`.
    pub fn load(path: &NormalizedPath) -> Result<Option<Self>> {
        if !io::exists(path)? {
            return Ok(None);
        }
        let resolver: Resolver = io::read_json(path)?;
        Ok(Some(Self { resolver }))
    }

    /// Store a resolver record as 2-space indented JSON.
    pub fn save(path: &NormalizedPath, resolver: &Resolver) -> Result<()> {
        io::write_json_pretty(path, resolver)?;
        Ok(())
    }

    /// The recorded data source, if any.
    pub fn data_source_name(&self) -> Option<&str> {
        self.resolver.data_source()
    }
}
