//! Synchronizer construction and shared helpers

use aav_appsync::ResolverApi;
use aav_fs::ResolverLayout;

use crate::{Error, Prompter, Result, SyncConfig};

/// Synchronizes a local resolvers tree with the resolvers of one API.
///
/// All operations run sequentially: every remote call, file operation and
/// prompt completes before the next step starts.
pub struct Synchronizer<A, P> {
    config: SyncConfig,
    layout: ResolverLayout,
    api: A,
    prompter: P,
}

impl<A: ResolverApi, P: Prompter> Synchronizer<A, P> {
    /// Create a synchronizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ApiMismatch`] if `api` is bound to another API id
    /// than `config`.
    pub fn new(config: SyncConfig, api: A, prompter: P) -> Result<Self> {
        if api.api_id() != config.api_id() {
            return Err(Error::ApiMismatch {
                expected: config.api_id().to_string(),
                actual: api.api_id().to_string(),
            });
        }

        let layout = ResolverLayout::new(config.resolvers_root().clone());
        Ok(Self {
            config,
            layout,
            api,
            prompter,
        })
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn layout(&self) -> &ResolverLayout {
        &self.layout
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Ask for one of `items`.
    pub(super) fn select_one<'a>(
        &self,
        prompt: &str,
        items: &'a [String],
    ) -> Result<Option<&'a String>> {
        match self.prompter.select(prompt, items).map_err(Error::Prompt)? {
            Some(index) => lookup(items, index).map(Some),
            None => Ok(None),
        }
    }

    /// Ask for any subset of `items`, returned in the order offered.
    pub(super) fn select_many<'a>(
        &self,
        prompt: &str,
        items: &'a [String],
    ) -> Result<Vec<&'a String>> {
        let mut indices = self
            .prompter
            .multi_select(prompt, items)
            .map_err(Error::Prompt)?;
        indices.sort_unstable();
        indices.dedup();
        indices.into_iter().map(|i| lookup(items, i)).collect()
    }

    pub(super) fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompter.confirm(prompt).map_err(Error::Prompt)
    }
}

fn lookup(items: &[String], index: usize) -> Result<&String> {
    items.get(index).ok_or(Error::InvalidSelection {
        index,
        len: items.len(),
    })
}

/// `Type.field`
pub(super) fn coordinate(type_name: &str, field_name: &str) -> String {
    format!("{type_name}.{field_name}")
}
