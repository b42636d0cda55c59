//! The synchronizer and its operations
//!
//! Each operation lives in its own file as an `impl` block on
//! [`Synchronizer`]; reports returned to the caller are in `report`.

mod delete;
mod engine;
mod pull;
mod push;
mod report;

pub use engine::Synchronizer;
pub use pull::PULL_TYPE_NAME;
pub use report::{DeleteOutcome, DeleteReport, PullReport, PushFailure, PushReport};
