//! Error types for aav-appsync

/// Result type for aav-appsync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the resolver API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, connection reset, timeout)
    #[error("{operation} request failed: {source}")]
    Http {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("{operation} failed with HTTP {status}: {message}")]
    Status {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// The response body did not have the expected shape
    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized
    #[error("Failed to encode {operation} request: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A required credential variable is not set
    #[error("{var} must be set")]
    MissingCredentials { var: &'static str },

    /// `AWS_PROFILE` names a profile without static keys
    #[error("Profile {profile} has no aws_access_key_id/aws_secret_access_key")]
    ProfileCredentials { profile: String },

    /// A shared AWS configuration file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ProfileFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured endpoint is not a usable URL
    #[error("Invalid endpoint {url}: {message}")]
    InvalidEndpoint { url: String, message: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl Error {
    /// HTTP status of a rejected call, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
