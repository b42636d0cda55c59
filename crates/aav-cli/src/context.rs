//! Wiring of configuration, remote client and prompter

use aav_appsync::profile::profile_name;
use aav_appsync::{AppSyncClient, ClientConfig, Credentials, SharedProfiles};
use aav_core::{SyncConfig, Synchronizer};

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::interactive::DialoguerPrompter;

/// Fallback consulted when `--region`/`AWS_REGION` is absent
pub const DEFAULT_REGION_VAR: &str = "AWS_DEFAULT_REGION";

/// The synchronizer used by every command
pub type CliSynchronizer = Synchronizer<AppSyncClient, DialoguerPrompter>;

/// Build the synchronizer from parsed arguments and the environment.
///
/// `API_ID` and `RESOLVERS_PATH` are checked before anything else so a
/// misconfigured invocation never reaches the network.
pub fn synchronizer(cli: &Cli) -> Result<CliSynchronizer> {
    let config = SyncConfig::from_values(cli.api_id.clone(), cli.resolvers_path.clone())?;
    let env = |name: &str| std::env::var(name).ok();
    let profiles = SharedProfiles::load(env)?;
    let region = resolve_region(cli.region.clone(), env, &profiles)?;
    let credentials = Credentials::resolve(env, &profiles)?;

    let mut client_config = ClientConfig::new(config.api_id(), region, credentials);
    if let Some(endpoint) = non_empty(cli.endpoint.clone()) {
        client_config = client_config.with_endpoint(endpoint);
    }
    let client = AppSyncClient::new(client_config)?;

    tracing::debug!(
        api_id = config.api_id(),
        root = %config.resolvers_root(),
        endpoint = client.base_url(),
        "Configured synchronizer"
    );

    Ok(Synchronizer::new(config, client, DialoguerPrompter)?)
}

/// `--region`/`AWS_REGION`, then `AWS_DEFAULT_REGION`, then the `region` of
/// the selected shared profile.
fn resolve_region(
    explicit: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
    profiles: &SharedProfiles,
) -> Result<String> {
    non_empty(explicit)
        .or_else(|| non_empty(lookup(DEFAULT_REGION_VAR)))
        .or_else(|| {
            profiles
                .region(&profile_name(&lookup))
                .map(str::to_string)
        })
        .ok_or_else(|| CliError::user("AWS_REGION must be set"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
