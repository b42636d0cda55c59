//! Operation reports

use aav_fs::NormalizedPath;
use serde::Serialize;

/// Result of a pull.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PullReport {
    /// Whether the resolvers root had to be created
    pub created_root: bool,
    /// Resolvers whose directory and `meta.json` were written (`Type.field`)
    pub written: Vec<String>,
    /// Template files left untouched because the user declined to override
    #[serde(serialize_with = "serialize_paths")]
    pub kept: Vec<NormalizedPath>,
    /// Resolvers without any mapping template
    pub skipped: Vec<String>,
}

/// A resolver that could not be pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushFailure {
    pub resolver: String,
    pub message: String,
}

/// Result of a push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PushReport {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    /// Directories with no template, or with no data source chosen
    pub skipped: Vec<String>,
    pub failed: Vec<PushFailure>,
}

impl PushReport {
    /// Whether every attempted resolver was pushed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// What a delete removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    /// Type directories removed
    pub removed_types: Vec<String>,
    /// Type directories left in place because they hold non-resolver files
    pub kept_types: Vec<String>,
    /// Resolver directories removed (`Type.field`)
    pub removed_resolvers: Vec<String>,
    /// Resolvers also deleted remotely (`Type.field`)
    pub remote_deletes: Vec<String>,
}

/// Outcome of a delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The resolvers root has no type directories
    NothingToDo,
    /// The chosen type has no resolver directories
    NoResolvers { type_name: String },
    /// The selection was processed (possibly empty)
    Done(DeleteReport),
}

fn serialize_paths<S: serde::Serializer>(
    paths: &[NormalizedPath],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(NormalizedPath::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn delete_outcome_serializes_with_tag() {
        let outcome = DeleteOutcome::NoResolvers {
            type_name: "Query".into(),
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"outcome": "no_resolvers", "type_name": "Query"})
        );
    }

    #[test]
    fn pull_report_serializes_kept_paths_as_strings() {
        let report = PullReport {
            kept: vec![NormalizedPath::new("r/Query/getUser/request.vm")],
            ..PullReport::default()
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["kept"], json!(["r/Query/getUser/request.vm"]));
    }

    #[test]
    fn push_report_success_tracks_failures() {
        let mut report = PushReport::default();
        assert!(report.is_success());
        report.failed.push(PushFailure {
            resolver: "Query.getUser".into(),
            message: "boom".into(),
        });
        assert!(!report.is_success());
    }
}
