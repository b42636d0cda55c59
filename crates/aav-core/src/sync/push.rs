//! Push: local templates to remote resolvers

use aav_appsync::{ResolverApi, ResolverInput};
use aav_fs::{ResolverFile, io};

use super::engine::{Synchronizer, coordinate};
use super::report::{PushFailure, PushReport};
use crate::{Error, Prompter, Result, ResolverSnapshot};

impl<A: ResolverApi, P: Prompter> Synchronizer<A, P> {
    /// Create or update a remote resolver for every local resolver directory
    /// holding at least one template.
    ///
    /// A directory with a `meta.json` naming a data source is updated with
    /// that data source; any other directory is created after the user picks
    /// a data source.
    ///
    /// # Errors
    ///
    /// Listing the tree or the data sources, reading templates and parsing
    /// `meta.json` abort the push. A rejected create or update is logged,
    /// recorded in [`PushReport::failed`], and the push moves on.
    pub fn push(&self) -> Result<PushReport> {
        let type_names = self.layout().list_types()?;
        let data_sources: Vec<String> = self
            .api()
            .list_data_sources()?
            .into_iter()
            .map(|ds| ds.name)
            .collect();
        tracing::debug!(count = data_sources.len(), "Fetched data sources");

        let mut report = PushReport::default();
        for type_name in &type_names {
            for field_name in self.layout().list_fields(type_name)? {
                self.push_resolver(type_name, &field_name, &data_sources, &mut report)?;
            }
        }
        Ok(report)
    }

    fn push_resolver(
        &self,
        type_name: &str,
        field_name: &str,
        data_sources: &[String],
        report: &mut PushReport,
    ) -> Result<()> {
        let resolver = coordinate(type_name, field_name);
        let meta_path = self.layout().file(type_name, field_name, ResolverFile::Meta);
        let request_path = self
            .layout()
            .file(type_name, field_name, ResolverFile::RequestTemplate);
        let response_path = self
            .layout()
            .file(type_name, field_name, ResolverFile::ResponseTemplate);

        let has_request = io::exists(&request_path)?;
        let has_response = io::exists(&response_path)?;
        if !has_request && !has_response {
            tracing::debug!(%resolver, "No templates, skipping");
            report.skipped.push(resolver);
            return Ok(());
        }

        let recorded = ResolverSnapshot::load(&meta_path)?
            .and_then(|snapshot| snapshot.data_source_name().map(str::to_string));
        let creating = recorded.is_none();
        let data_source_name = match recorded {
            Some(name) => name,
            None => {
                let prompt = format!("Please set data source for {resolver}");
                match self.select_one(&prompt, data_sources)? {
                    Some(name) => name.clone(),
                    None => {
                        tracing::warn!(%resolver, "No data source chosen, skipping");
                        report.skipped.push(resolver);
                        return Ok(());
                    }
                }
            }
        };

        tracing::info!(
            "{} resolver: {resolver}",
            if creating { "Creating" } else { "Updating" }
        );

        let input = ResolverInput {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
            data_source_name,
            request_mapping_template: has_request
                .then(|| io::read_text(&request_path))
                .transpose()?,
            response_mapping_template: has_response
                .then(|| io::read_text(&response_path))
                .transpose()?,
        };

        let stored = if creating {
            self.api().create_resolver(&input)
        } else {
            self.api().update_resolver(&input)
        }
        .map_err(Error::from)
        .and_then(|record| ResolverSnapshot::save(&meta_path, &record));

        match stored {
            Ok(()) if creating => report.created.push(resolver),
            Ok(()) => report.updated.push(resolver),
            Err(e) => {
                tracing::error!(%resolver, error = %e, "Failed to push resolver");
                report.failed.push(PushFailure {
                    resolver,
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }
}
