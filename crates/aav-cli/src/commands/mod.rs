//! Command implementations for aav

pub mod pull;
pub mod push;
pub mod rm;

pub use pull::run_pull;
pub use push::run_push;
pub use rm::{run_rm_resolver, run_rm_type};
