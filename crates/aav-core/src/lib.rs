//! Resolver template synchronization for aav
//!
//! Keeps a local tree of mapping templates in step with the resolvers of one
//! AppSync API:
//!
//! - **pull**: write remote `Query` resolvers to `<root>/<Type>/<field>/`
//! - **push**: create or update remote resolvers from local templates
//! - **delete**: remove whole types or single resolvers, locally and remotely
//!
//! # Architecture
//!
//! ```text
//!                 aav-cli
//!                    |
//!                aav-core   (Synchronizer, Prompter, SyncConfig)
//!                 /     \
//!           aav-fs     aav-appsync (ResolverApi)
//! ```
//!
//! The remote API and the interactive prompts are injected through the
//! [`ResolverApi`](aav_appsync::ResolverApi) and [`Prompter`] traits.

pub mod config;
pub mod error;
pub mod prompt;
pub mod snapshot;
pub mod sync;

pub use config::SyncConfig;
pub use error::{Error, Result};
pub use prompt::Prompter;
pub use snapshot::ResolverSnapshot;
pub use sync::{
    DeleteOutcome, DeleteReport, PullReport, PushFailure, PushReport, Synchronizer,
};
