//! Shared test utilities for the aav workspace.
//!
//! This crate provides doubles and fixtures for exercising the synchronizer
//! without a terminal or a network. It is only used as a dev-dependency and
//! is never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestResolvers`] builds a temporary resolvers root.
//! - [`prompter`]: [`ScriptedPrompter`] answers prompts from a script.
//! - [`remote`]: [`FakeResolverApi`] is an in-memory resolver API with a call log.

pub mod prompter;
pub mod remote;
pub mod tree;

pub use prompter::{Answer, ScriptedPrompter};
pub use remote::{ApiCall, FakeResolverApi};
pub use tree::TestResolvers;
