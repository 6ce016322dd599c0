use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Remote fetch failed: {0}")]
    RemoteFetch(String),

    #[error("Node not found: {name}: {message}")]
    NodeNotFound { name: String, message: String },

    #[error("Edge not found: {from} -> {to}: {message}")]
    EdgeNotFound {
        from: String,
        to: String,
        message: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// The human-readable message carried by this error, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::RemoteFetch(msg)
            | Error::InvalidArgument(msg)
            | Error::Serialization(msg)
            | Error::InvalidConfig(msg) => msg,
            Error::NodeNotFound { message, .. } | Error::EdgeNotFound { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
