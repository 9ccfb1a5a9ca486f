use thiserror::Error;

/// Errors that can occur while retrieving rates.
///
/// Never shown to the user verbatim; the UI reports one fixed message and
/// these end up in the log.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to reach the backend
    #[error("Connection to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("Backend returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Response body was not a rate table
    #[error("Malformed rates response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build rates client: {0}")]
    Client(#[source] reqwest::Error),

    /// Anything else a non-HTTP source wants to report
    #[error("{0}")]
    Other(String),
}

impl SourceError {
    /// Short classification for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Transport { .. } => "transport",
            SourceError::Status { .. } => "status",
            SourceError::Decode { .. } => "decode",
            SourceError::Client(_) => "client",
            SourceError::Other(_) => "other",
        }
    }
}
