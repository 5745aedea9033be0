//! Error types for zotero-scholar.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Callers that only need to tell the user "the lookup failed" can use the `Display`
//! text of any variant directly.

/// Errors from the two remote lookups.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, body read, etc.)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error raised inside the request middleware stack
    #[error("Middleware error: {0}")]
    Middleware(anyhow::Error),

    /// Non-success HTTP status
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Endpoint URL could not be built
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// HTTP status code, if the server answered with a non-success status.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request never produced an HTTP response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Middleware(_))
    }
}

impl From<reqwest_middleware::Error> for ClientError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => Self::Transport(e),
            reqwest_middleware::Error::Middleware(e) => Self::Middleware(e),
        }
    }
}

/// Errors from configuration validation.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No library identifier was supplied
    #[error("Zotero library ID is missing (set --library-id or ZOTERO_LIBRARY_ID)")]
    MissingLibraryId,

    /// The library identifier is the unfilled placeholder
    #[error("Zotero library ID is still the placeholder '{0}'")]
    PlaceholderLibraryId(String),

    /// The library identifier is not numeric
    #[error("Zotero library ID must contain only digits, got '{0}'")]
    InvalidLibraryId(String),

    /// A base URL could not be parsed
    #[error("Invalid {name} URL '{value}': {reason}")]
    InvalidUrl {
        /// Which setting was invalid
        name: &'static str,
        /// The rejected value
        value: String,
        /// Parser message
        reason: String,
    },
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
