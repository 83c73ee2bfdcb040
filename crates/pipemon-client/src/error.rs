use thiserror::Error;

/// Errors surfaced by the client layer.
///
/// All of these are recoverable results propagated up to the CLI entry
/// point, which maps them to exit codes; library code never terminates the
/// process.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration incomplete: {0} is not set")]
    MissingConfig(&'static str),

    #[error("no access token available: set {0}")]
    MissingCredential(&'static str),

    #[error("pipeline not found: {name}")]
    PipelineNotFound { name: String },

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("pipeline name must not be empty")]
    EmptyPipelineName,

    #[error("run window must be 1..=30 days, got {0}")]
    InvalidRunWindow(i64),

    #[error("unexpected response ({status}): {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
}

/// Convenience alias for client results.
pub type ClientResult<T> = Result<T, ClientError>;
