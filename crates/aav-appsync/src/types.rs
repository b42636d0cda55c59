//! Resolver and data source records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys held in typed fields of [`Resolver`].
const TYPED_KEYS: [&str; 5] = [
    "typeName",
    "fieldName",
    "dataSourceName",
    "requestMappingTemplate",
    "responseMappingTemplate",
];

/// A resolver record as returned by the API.
///
/// Fields the synchronizer reasons about are typed; everything else the API
/// sends (ARN, kind, caching and sync config, runtime, ...) is kept verbatim
/// in `extra`. Serializing a deserialized record reproduces the remote key
/// order, including keys the API sent as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Resolver {
    pub type_name: String,
    pub field_name: String,
    pub data_source_name: Option<String>,
    pub request_mapping_template: Option<String>,
    pub response_mapping_template: Option<String>,
    pub extra: Map<String, Value>,
    /// Keys in the order they were received.
    key_order: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypedFields {
    #[serde(default)]
    type_name: Option<String>,
    #[serde(default)]
    field_name: Option<String>,
    #[serde(default)]
    data_source_name: Option<String>,
    #[serde(default)]
    request_mapping_template: Option<String>,
    #[serde(default)]
    response_mapping_template: Option<String>,
}

impl TryFrom<Map<String, Value>> for Resolver {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = map.keys().cloned().collect();
        let mut typed = Map::new();
        let mut extra = Map::new();
        for (key, value) in map {
            if TYPED_KEYS.contains(&key.as_str()) {
                typed.insert(key, value);
            } else {
                extra.insert(key, value);
            }
        }

        let fields: TypedFields = serde_json::from_value(Value::Object(typed))?;
        Ok(Self {
            type_name: fields.type_name.unwrap_or_default(),
            field_name: fields.field_name.unwrap_or_default(),
            data_source_name: fields.data_source_name,
            request_mapping_template: fields.request_mapping_template,
            response_mapping_template: fields.response_mapping_template,
            extra,
            key_order,
        })
    }
}

impl From<Resolver> for Map<String, Value> {
    fn from(resolver: Resolver) -> Self {
        let Resolver {
            type_name,
            field_name,
            data_source_name,
            request_mapping_template,
            response_mapping_template,
            mut extra,
            key_order,
        } = resolver;

        let mut typed = Map::new();
        typed.insert("typeName".into(), Value::String(type_name));
        typed.insert("fieldName".into(), Value::String(field_name));
        let optional = [
            ("dataSourceName", data_source_name),
            ("requestMappingTemplate", request_mapping_template),
            ("responseMappingTemplate", response_mapping_template),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                typed.insert(key.into(), Value::String(value));
            }
        }

        // Received keys first, in their original order; a typed key that is
        // now empty was received as null.
        let mut out = Map::new();
        for key in key_order {
            if let Some(value) = typed.shift_remove(&key).or_else(|| extra.shift_remove(&key)) {
                out.insert(key, value);
            } else if TYPED_KEYS.contains(&key.as_str()) {
                out.insert(key, Value::Null);
            }
        }
        out.extend(typed);
        out.extend(extra);
        out
    }
}

/// Key order is presentation only and does not take part in equality.
impl PartialEq for Resolver {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.field_name == other.field_name
            && self.data_source_name == other.data_source_name
            && self.request_mapping_template == other.request_mapping_template
            && self.response_mapping_template == other.response_mapping_template
            && self.extra == other.extra
    }
}

impl Resolver {
    pub fn new(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
            ..Self::default()
        }
    }

    /// `Type.field`
    pub fn coordinate(&self) -> String {
        format!("{}.{}", self.type_name, self.field_name)
    }

    /// Request template, treating an empty string as absent.
    pub fn request_template(&self) -> Option<&str> {
        non_empty(self.request_mapping_template.as_deref())
    }

    /// Response template, treating an empty string as absent.
    pub fn response_template(&self) -> Option<&str> {
        non_empty(self.response_mapping_template.as_deref())
    }

    /// Whether at least one mapping template is present.
    pub fn has_templates(&self) -> bool {
        self.request_template().is_some() || self.response_template().is_some()
    }

    /// Recorded data source, treating an empty string as absent.
    pub fn data_source(&self) -> Option<&str> {
        non_empty(self.data_source_name.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A data source record. Only the name is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DataSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Payload shared by create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverInput {
    pub type_name: String,
    pub field_name: String,
    pub data_source_name: String,
    pub request_mapping_template: Option<String>,
    pub response_mapping_template: Option<String>,
}

impl ResolverInput {
    /// `Type.field`
    pub fn coordinate(&self) -> String {
        format!("{}.{}", self.type_name, self.field_name)
    }
}

/// Body of `POST /apis/{apiId}/types/{typeName}/resolvers`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateResolverBody<'a> {
    pub field_name: &'a str,
    pub data_source_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_mapping_template: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mapping_template: Option<&'a str>,
}

/// Body of `POST /apis/{apiId}/types/{typeName}/resolvers/{fieldName}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateResolverBody<'a> {
    pub data_source_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_mapping_template: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mapping_template: Option<&'a str>,
}

impl<'a> From<&'a ResolverInput> for CreateResolverBody<'a> {
    fn from(input: &'a ResolverInput) -> Self {
        Self {
            field_name: &input.field_name,
            data_source_name: &input.data_source_name,
            request_mapping_template: input.request_mapping_template.as_deref(),
            response_mapping_template: input.response_mapping_template.as_deref(),
        }
    }
}

impl<'a> From<&'a ResolverInput> for UpdateResolverBody<'a> {
    fn from(input: &'a ResolverInput) -> Self {
        Self {
            data_source_name: &input.data_source_name,
            request_mapping_template: input.request_mapping_template.as_deref(),
            response_mapping_template: input.response_mapping_template.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResolverEnvelope {
    pub resolver: Resolver,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListResolversResponse {
    #[serde(default)]
    pub resolvers: Vec<Resolver>,
    #[serde(default)]
    pub next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDataSourcesResponse {
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Error body shape of the AppSync REST API.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(alias = "Message")]
    pub message: Option<String>,
}
