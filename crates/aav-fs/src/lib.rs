//! Filesystem layer for aav
//!
//! Provides path handling, the on-disk resolver layout, and the small set of
//! I/O operations the synchronizer needs.

pub mod constants;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use constants::ResolverFile;
pub use error::{Error, Result};
pub use layout::ResolverLayout;
pub use path::NormalizedPath;
