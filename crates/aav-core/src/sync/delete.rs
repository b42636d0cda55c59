//! Delete: remove types or resolvers locally and remotely

use aav_appsync::ResolverApi;
use aav_fs::{ResolverFile, io};

use super::engine::{Synchronizer, coordinate};
use super::report::{DeleteOutcome, DeleteReport};
use crate::{Prompter, Result};

impl<A: ResolverApi, P: Prompter> Synchronizer<A, P> {
    /// Remove whole types chosen by the user.
    ///
    /// Every resolver of a chosen type goes through the same removal as
    /// [`delete_resolver`](Self::delete_resolver), then the emptied type
    /// directory is removed. A type directory still holding other files is
    /// kept and the remaining selected types are processed.
    pub fn delete_type(&self) -> Result<DeleteOutcome> {
        let type_names = self.layout().list_types()?;
        if type_names.is_empty() {
            return Ok(DeleteOutcome::NothingToDo);
        }

        let mut report = DeleteReport::default();
        for type_name in self.select_many("Choose type", &type_names)? {
            for field_name in self.layout().list_fields(type_name)? {
                self.delete_resolver_at(type_name, &field_name, &mut report)?;
            }
            let type_dir = self.layout().type_dir(type_name);
            let leftovers = io::list_dir_names(&type_dir)?;
            if leftovers.is_empty() {
                io::remove_empty_dir(&type_dir)?;
                tracing::info!("Removed {type_name}");
                report.removed_types.push(type_name.clone());
            } else {
                tracing::warn!(
                    path = %type_dir,
                    ?leftovers,
                    "Keeping {type_name}: directory holds other files"
                );
                report.kept_types.push(type_name.clone());
            }
        }
        Ok(DeleteOutcome::Done(report))
    }

    /// Remove resolvers of one type chosen by the user.
    pub fn delete_resolver(&self) -> Result<DeleteOutcome> {
        let type_names = self.layout().list_types()?;
        if type_names.is_empty() {
            return Ok(DeleteOutcome::NothingToDo);
        }

        let Some(type_name) = self.select_one("Choose type", &type_names)? else {
            return Ok(DeleteOutcome::Done(DeleteReport::default()));
        };

        let field_names = self.layout().list_fields(type_name)?;
        if field_names.is_empty() {
            return Ok(DeleteOutcome::NoResolvers {
                type_name: type_name.clone(),
            });
        }

        let mut report = DeleteReport::default();
        for field_name in self.select_many("Choose resolvers", &field_names)? {
            self.delete_resolver_at(type_name, field_name, &mut report)?;
        }
        Ok(DeleteOutcome::Done(report))
    }

    /// Delete the remote resolver when `meta.json` is present, then remove
    /// the local directory either way.
    fn delete_resolver_at(
        &self,
        type_name: &str,
        field_name: &str,
        report: &mut DeleteReport,
    ) -> Result<()> {
        let resolver = coordinate(type_name, field_name);
        let meta_path = self.layout().file(type_name, field_name, ResolverFile::Meta);

        if io::exists(&meta_path)? {
            tracing::debug!(%resolver, "Deleting remote resolver");
            self.api().delete_resolver(type_name, field_name)?;
            report.remote_deletes.push(resolver.clone());
        }

        io::remove_dir_all(&self.layout().resolver_dir(type_name, field_name))?;
        tracing::info!("Removed {resolver}");
        report.removed_resolvers.push(resolver);
        Ok(())
    }
}
