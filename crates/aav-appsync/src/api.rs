//! The resolver API seam

use crate::{DataSource, Resolver, ResolverInput, Result};

/// Remote resolver configuration of a single GraphQL API.
///
/// Implementations are bound to one API id at construction time; callers
/// never pass it per call.
pub trait ResolverApi {
    /// The API id this client is bound to.
    fn api_id(&self) -> &str;

    /// List the resolvers attached to a type.
    ///
    /// Returns the first page only.
    fn list_resolvers(&self, type_name: &str) -> Result<Vec<Resolver>>;

    /// List the data sources of the API.
    ///
    /// Returns the first page only.
    fn list_data_sources(&self) -> Result<Vec<DataSource>>;

    /// Create a resolver and return the stored record.
    fn create_resolver(&self, input: &ResolverInput) -> Result<Resolver>;

    /// Update a resolver and return the stored record.
    fn update_resolver(&self, input: &ResolverInput) -> Result<Resolver>;

    /// Delete a resolver.
    fn delete_resolver(&self, type_name: &str, field_name: &str) -> Result<()>;
}

impl<T: ResolverApi + ?Sized> ResolverApi for &T {
    fn api_id(&self) -> &str {
        (**self).api_id()
    }

    fn list_resolvers(&self, type_name: &str) -> Result<Vec<Resolver>> {
        (**self).list_resolvers(type_name)
    }

    fn list_data_sources(&self) -> Result<Vec<DataSource>> {
        (**self).list_data_sources()
    }

    fn create_resolver(&self, input: &ResolverInput) -> Result<Resolver> {
        (**self).create_resolver(input)
    }

    fn update_resolver(&self, input: &ResolverInput) -> Result<Resolver> {
        (**self).update_resolver(input)
    }

    fn delete_resolver(&self, type_name: &str, field_name: &str) -> Result<()> {
        (**self).delete_resolver(type_name, field_name)
    }
}
