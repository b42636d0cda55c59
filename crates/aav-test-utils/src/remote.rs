//! [`FakeResolverApi`]: an in-memory resolver API.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use aav_appsync::{DataSource, Error, Resolver, ResolverApi, ResolverInput, Result};
use serde_json::Value;

/// A call received by [`FakeResolverApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListResolvers { type_name: String },
    ListDataSources,
    Create(ResolverInput),
    Update(ResolverInput),
    Delete { type_name: String, field_name: String },
}

#[derive(Debug, Default)]
struct State {
    resolvers: BTreeMap<(String, String), Resolver>,
    calls: Vec<ApiCall>,
}

/// Resolver API double keeping resolvers in memory.
///
/// Create fails for an existing resolver and update fails for a missing one,
/// the way the real control plane answers. Records returned by create and
/// update carry a `resolverArn` and `kind` like real ones.
#[derive(Debug)]
pub struct FakeResolverApi {
    api_id: String,
    data_sources: Vec<String>,
    failing: BTreeSet<String>,
    fail_listing: bool,
    state: RefCell<State>,
}

impl FakeResolverApi {
    pub fn new(api_id: &str) -> Self {
        Self {
            api_id: api_id.to_string(),
            data_sources: Vec::new(),
            failing: BTreeSet::new(),
            fail_listing: false,
            state: RefCell::new(State::default()),
        }
    }

    /// Seed a remote resolver.
    pub fn with_resolver(self, resolver: Resolver) -> Self {
        self.state.borrow_mut().resolvers.insert(
            (resolver.type_name.clone(), resolver.field_name.clone()),
            resolver,
        );
        self
    }

    /// Set the data source names.
    pub fn with_data_sources(mut self, names: &[&str]) -> Self {
        self.data_sources = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Make create and update of `Type.field` fail with HTTP 400.
    pub fn failing_writes_for(mut self, coordinate: &str) -> Self {
        self.failing.insert(coordinate.to_string());
        self
    }

    /// Make every list call fail with HTTP 500.
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.borrow().calls.clone()
    }

    /// Calls other than the list calls.
    pub fn write_calls(&self) -> Vec<ApiCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, ApiCall::ListResolvers { .. } | ApiCall::ListDataSources))
            .collect()
    }

    /// The stored resolver for a coordinate.
    pub fn resolver(&self, type_name: &str, field_name: &str) -> Option<Resolver> {
        self.state
            .borrow()
            .resolvers
            .get(&(type_name.to_string(), field_name.to_string()))
            .cloned()
    }

    fn record(&self, call: ApiCall) {
        self.state.borrow_mut().calls.push(call);
    }

    fn check_listing(&self, operation: &'static str) -> Result<()> {
        if self.fail_listing {
            return Err(Error::Status {
                operation,
                status: 500,
                message: "Internal failure".to_string(),
            });
        }
        Ok(())
    }

    fn store(&self, operation: &'static str, input: &ResolverInput) -> Result<Resolver> {
        if self.failing.contains(&input.coordinate()) {
            return Err(Error::Status {
                operation,
                status: 400,
                message: format!("Invalid mapping template for {}", input.coordinate()),
            });
        }

        let mut resolver = Resolver::new(&input.type_name, &input.field_name);
        resolver.data_source_name = Some(input.data_source_name.clone());
        resolver.request_mapping_template = input.request_mapping_template.clone();
        resolver.response_mapping_template = input.response_mapping_template.clone();
        resolver.extra.insert(
            "resolverArn".to_string(),
            Value::String(format!(
                "arn:aws:appsync:us-east-1:000000000000:apis/{}/types/{}/resolvers/{}",
                self.api_id, input.type_name, input.field_name
            )),
        );
        resolver
            .extra
            .insert("kind".to_string(), Value::String("UNIT".to_string()));

        self.state.borrow_mut().resolvers.insert(
            (input.type_name.clone(), input.field_name.clone()),
            resolver.clone(),
        );
        Ok(resolver)
    }

    fn contains(&self, type_name: &str, field_name: &str) -> bool {
        self.resolver(type_name, field_name).is_some()
    }
}

impl ResolverApi for FakeResolverApi {
    fn api_id(&self) -> &str {
        &self.api_id
    }

    fn list_resolvers(&self, type_name: &str) -> Result<Vec<Resolver>> {
        self.record(ApiCall::ListResolvers {
            type_name: type_name.to_string(),
        });
        self.check_listing("ListResolvers")?;
        Ok(self
            .state
            .borrow()
            .resolvers
            .values()
            .filter(|r| r.type_name == type_name)
            .cloned()
            .collect())
    }

    fn list_data_sources(&self) -> Result<Vec<DataSource>> {
        self.record(ApiCall::ListDataSources);
        self.check_listing("ListDataSources")?;
        Ok(self.data_sources.iter().map(DataSource::new).collect())
    }

    fn create_resolver(&self, input: &ResolverInput) -> Result<Resolver> {
        self.record(ApiCall::Create(input.clone()));
        if self.contains(&input.type_name, &input.field_name) {
            return Err(Error::Status {
                operation: "CreateResolver",
                status: 400,
                message: format!("Resolver {} already exists", input.coordinate()),
            });
        }
        self.store("CreateResolver", input)
    }

    fn update_resolver(&self, input: &ResolverInput) -> Result<Resolver> {
        self.record(ApiCall::Update(input.clone()));
        if !self.contains(&input.type_name, &input.field_name) {
            return Err(Error::Status {
                operation: "UpdateResolver",
                status: 404,
                message: format!("Resolver {} not found", input.coordinate()),
            });
        }
        self.store("UpdateResolver", input)
    }

    fn delete_resolver(&self, type_name: &str, field_name: &str) -> Result<()> {
        self.record(ApiCall::Delete {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
        });
        let removed = self
            .state
            .borrow_mut()
            .resolvers
            .remove(&(type_name.to_string(), field_name.to_string()));
        match removed {
            Some(_) => Ok(()),
            None => Err(Error::Status {
                operation: "DeleteResolver",
                status: 404,
                message: format!("Resolver {type_name}.{field_name} not found"),
            }),
        }
    }
}
