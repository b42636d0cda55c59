//! Blocking AppSync REST client

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_TYPE, HOST};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::sigv4::{self, SignableRequest, SigningParams};
use crate::types::{
    CreateResolverBody, ErrorBody, ListDataSourcesResponse, ListResolversResponse,
    ResolverEnvelope, UpdateResolverBody,
};
use crate::{
    Credentials, DataSource, Error, Resolver, ResolverApi, ResolverInput, Result, routes,
};

const SERVICE: &str = "appsync";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for [`AppSyncClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_id: String,
    pub region: String,
    /// Overrides `https://appsync.<region>.amazonaws.com`
    pub endpoint: Option<String>,
    pub credentials: Credentials,
}

impl ClientConfig {
    pub fn new(
        api_id: impl Into<String>,
        region: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            api_id: api_id.into(),
            region: region.into(),
            endpoint: None,
            credentials,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// The base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://appsync.{}.amazonaws.com", self.region),
        }
    }
}

/// [`ResolverApi`] over the AppSync control plane.
pub struct AppSyncClient {
    config: ClientConfig,
    base_url: String,
    host: String,
    http: Client,
}

impl AppSyncClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url();
        let host = host_header(&base_url)?;
        let http = Client::builder()
            .user_agent(concat!("aav/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            config,
            base_url,
            host,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn execute(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<Response> {
        let body = match body {
            Some(value) => serde_json::to_vec(value)
                .map_err(|source| Error::Encode { operation, source })?,
            None => Vec::new(),
        };

        let mut headers = vec![(HOST.as_str().to_string(), self.host.clone())];
        if !body.is_empty() {
            headers.push((CONTENT_TYPE.as_str().to_string(), "application/json".to_string()));
        }

        let signed = sigv4::sign(
            &SignableRequest {
                method: method.as_str(),
                path,
                query: "",
                headers: headers.clone(),
                body: &body,
            },
            &SigningParams {
                credentials: &self.config.credentials,
                region: &self.config.region,
                service: SERVICE,
                time: chrono::Utc::now(),
            },
        );

        tracing::debug!(operation, %method, path, "Calling AppSync");

        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        for (name, value) in headers.into_iter().chain(signed) {
            request = request.header(name, value);
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request
            .send()
            .map_err(|source| Error::Http { operation, source })?;
        ensure_ok(operation, response)
    }

    fn execute_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T> {
        let response = self.execute(operation, method, path, body)?;
        let bytes = response
            .bytes()
            .map_err(|source| Error::Http { operation, source })?;
        serde_json::from_slice(&bytes).map_err(|source| Error::Decode { operation, source })
    }
}

impl ResolverApi for AppSyncClient {
    fn api_id(&self) -> &str {
        &self.config.api_id
    }

    fn list_resolvers(&self, type_name: &str) -> Result<Vec<Resolver>> {
        let page: ListResolversResponse = self.execute_json(
            "ListResolvers",
            Method::GET,
            &routes::resolvers(self.api_id(), type_name),
            None::<&()>,
        )?;
        if page.next_token.is_some() {
            tracing::warn!(type_name, "ListResolvers returned more pages; only the first is used");
        }
        Ok(page.resolvers)
    }

    fn list_data_sources(&self) -> Result<Vec<DataSource>> {
        let page: ListDataSourcesResponse = self.execute_json(
            "ListDataSources",
            Method::GET,
            &routes::data_sources(self.api_id()),
            None::<&()>,
        )?;
        if page.next_token.is_some() {
            tracing::warn!("ListDataSources returned more pages; only the first is used");
        }
        Ok(page.data_sources)
    }

    fn create_resolver(&self, input: &ResolverInput) -> Result<Resolver> {
        let envelope: ResolverEnvelope = self.execute_json(
            "CreateResolver",
            Method::POST,
            &routes::resolvers(self.api_id(), &input.type_name),
            Some(&CreateResolverBody::from(input)),
        )?;
        Ok(envelope.resolver)
    }

    fn update_resolver(&self, input: &ResolverInput) -> Result<Resolver> {
        let envelope: ResolverEnvelope = self.execute_json(
            "UpdateResolver",
            Method::POST,
            &routes::resolver(self.api_id(), &input.type_name, &input.field_name),
            Some(&UpdateResolverBody::from(input)),
        )?;
        Ok(envelope.resolver)
    }

    fn delete_resolver(&self, type_name: &str, field_name: &str) -> Result<()> {
        self.execute(
            "DeleteResolver",
            Method::DELETE,
            &routes::resolver(self.api_id(), type_name, field_name),
            None::<&()>,
        )?;
        Ok(())
    }
}

fn ensure_ok(operation: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().unwrap_or_default();
    Err(Error::Status {
        operation,
        status: status.as_u16(),
        message: error_message(&text, status.canonical_reason()),
    })
}

/// Extract the human-readable message from an error body.
fn error_message(body: &str, reason: Option<&str>) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| "no error message".to_string())
}

/// Host header value for a base URL, port included when non-default.
fn host_header(base_url: &str) -> Result<String> {
    let url = reqwest::Url::parse(base_url).map_err(|e| Error::InvalidEndpoint {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;
    let host = url.host_str().ok_or_else(|| Error::InvalidEndpoint {
        url: base_url.to_string(),
        message: "missing host".to_string(),
    })?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
