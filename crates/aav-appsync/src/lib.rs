//! AppSync resolver API client for aav
//!
//! The synchronizer talks to the remote resolver configuration only through
//! the [`ResolverApi`] trait. [`AppSyncClient`] implements it over the AppSync
//! REST control plane with Signature Version 4 request signing.
//!
//! # Example
//!
//! ```no_run
//! use aav_appsync::{AppSyncClient, ClientConfig, Credentials, ResolverApi, SharedProfiles};
//!
//! # fn main() -> aav_appsync::Result<()> {
//! let env = |name: &str| std::env::var(name).ok();
//! let credentials = Credentials::resolve(env, &SharedProfiles::load(env)?)?;
//! let config = ClientConfig::new("abcdefghijklmnopqrstuvwxyz", "eu-west-1", credentials);
//! let client = AppSyncClient::new(config)?;
//! for resolver in client.list_resolvers("Query")? {
//!     println!("{}", resolver.coordinate());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod credentials;
pub mod error;
pub mod profile;
pub mod routes;
pub mod sigv4;
pub mod types;

pub use api::ResolverApi;
pub use client::{AppSyncClient, ClientConfig};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use profile::SharedProfiles;
pub use types::{DataSource, Resolver, ResolverInput};
