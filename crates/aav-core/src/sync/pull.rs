//! Pull: remote resolvers to local templates

use aav_appsync::{Resolver, ResolverApi};
use aav_fs::{NormalizedPath, ResolverFile, io};

use super::engine::Synchronizer;
use super::report::PullReport;
use crate::{Prompter, Result, ResolverSnapshot};

/// Only resolvers of this type are pulled.
pub const PULL_TYPE_NAME: &str = "Query";

impl<A: ResolverApi, P: Prompter> Synchronizer<A, P> {
    /// Write every remote `Query` resolver that has a mapping template to the
    /// local tree.
    ///
    /// Existing template files are overwritten only after confirmation,
    /// unless `always_yes` is set. `meta.json` is always rewritten.
    ///
    /// # Errors
    ///
    /// Fails on the first remote or filesystem error; resolvers already
    /// written stay on disk.
    pub fn pull(&self, always_yes: bool) -> Result<PullReport> {
        let mut report = PullReport {
            created_root: io::ensure_dir(self.layout().root())?,
            ..PullReport::default()
        };

        let resolvers = self.api().list_resolvers(PULL_TYPE_NAME)?;
        tracing::debug!(count = resolvers.len(), "Fetched resolvers");

        for resolver in &resolvers {
            self.pull_resolver(resolver, always_yes, &mut report)?;
        }

        Ok(report)
    }

    fn pull_resolver(
        &self,
        resolver: &Resolver,
        always_yes: bool,
        report: &mut PullReport,
    ) -> Result<()> {
        let coordinate = resolver.coordinate();
        if !resolver.has_templates() {
            tracing::debug!(resolver = %coordinate, "No mapping templates, skipping");
            report.skipped.push(coordinate);
            return Ok(());
        }
        if resolver.type_name.is_empty() || resolver.field_name.is_empty() {
            tracing::warn!(
                resolver = %coordinate,
                "Resolver record without type or field name, skipping"
            );
            report.skipped.push(coordinate);
            return Ok(());
        }

        tracing::info!("Processing resolver: {coordinate}");
        let (type_name, field_name) = (&resolver.type_name, &resolver.field_name);
        io::ensure_dir(&self.layout().resolver_dir(type_name, field_name))?;

        let templates = [
            (ResolverFile::RequestTemplate, resolver.request_template()),
            (ResolverFile::ResponseTemplate, resolver.response_template()),
        ];
        for (file, template) in templates {
            let Some(template) = template else { continue };
            let path = self.layout().file(type_name, field_name, file);
            if !self.write_template(&path, template, always_yes)? {
                report.kept.push(path);
            }
        }

        ResolverSnapshot::save(
            &self.layout().file(type_name, field_name, ResolverFile::Meta),
            resolver,
        )?;
        report.written.push(coordinate);
        Ok(())
    }

    /// Returns `false` when the user chose to keep the existing file.
    fn write_template(
        &self,
        path: &NormalizedPath,
        template: &str,
        always_yes: bool,
    ) -> Result<bool> {
        if !always_yes && io::exists(path)? {
            let prompt = format!("Template {path} already exists. Would you like to override it?");
            if !self.confirm(&prompt)? {
                tracing::debug!(%path, "Keeping local template");
                return Ok(false);
            }
        }
        io::write_text(path, template)?;
        Ok(true)
    }
}
