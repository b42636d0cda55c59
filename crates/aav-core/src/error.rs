//! Error types for aav-core

/// Result type for aav-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing resolvers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration value is missing or empty
    #[error("{name} must be set")]
    MissingConfig { name: &'static str },

    /// The API client is bound to a different API than the configuration
    #[error("API client is bound to {actual}, configuration expects {expected}")]
    ApiMismatch { expected: String, actual: String },

    /// A prompt returned an index outside the offered choices
    #[error("Selection {index} is out of range for {len} choices")]
    InvalidSelection { index: usize, len: usize },

    /// The interactive prompt failed (terminal closed, not a TTY)
    #[error("Interactive prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    /// Filesystem error from aav-fs
    #[error(transparent)]
    Fs(#[from] aav_fs::Error),

    /// Remote API error from aav-appsync
    #[error(transparent)]
    Api(#[from] aav_appsync::Error),
}
