//! Configuration for zotero-scholar.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};
use crate::models::LibraryKind;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the Zotero web API.
    pub const ZOTERO_API: &str = "https://api.zotero.org";

    /// Zotero API version sent with every search.
    pub const ZOTERO_API_VERSION: &str = "3";

    /// Response format requested from Zotero.
    pub const ZOTERO_FORMAT: &str = "json";

    /// Semantic Scholar v1 API endpoint.
    pub const SEMANTIC_SCHOLAR_API: &str = "https://api.semanticscholar.org/v1";

    /// Placeholder shipped in templates; never a real library.
    pub const LIBRARY_ID_PLACEHOLDER: &str = "YOUR_USER_ID";

    /// How long a notification stays on screen.
    pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// A validated Zotero library identifier.
///
/// Zotero user and group IDs are numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryId(String);

impl LibraryId {
    /// Validate and wrap a library identifier.
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingLibraryId);
        }
        if trimmed == api::LIBRARY_ID_PLACEHOLDER {
            return Err(ConfigError::PlaceholderLibraryId(trimmed.to_string()));
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidLibraryId(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The identifier as sent in the request path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LibraryId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LibraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The Zotero library to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    /// User or group library.
    pub kind: LibraryKind,

    /// Numeric library ID.
    pub id: LibraryId,
}

impl Library {
    /// A personal user library.
    #[must_use]
    pub const fn user(id: LibraryId) -> Self {
        Self { kind: LibraryKind::User, id }
    }

    /// A shared group library.
    #[must_use]
    pub const fn group(id: LibraryId) -> Self {
        Self { kind: LibraryKind::Group, id }
    }

    /// Path prefix for this library, e.g. `users/12345`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}", self.kind.path_segment(), self.id)
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Library searched by the Zotero client.
    pub library: Library,

    /// Base URL for the Zotero API (for testing with mock servers).
    pub zotero_api_url: String,

    /// Base URL for the Semantic Scholar v1 API (for testing with mock servers).
    pub semantic_scholar_api_url: String,

    /// Request timeout. `None` keeps the transport default.
    pub request_timeout: Option<Duration>,

    /// Connection timeout. `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,

    /// Lifetime of a failure notification.
    pub notification_duration: Duration,
}

impl Config {
    /// Create a configuration for the given library against the public APIs.
    #[must_use]
    pub fn new(library: Library) -> Self {
        Self {
            library,
            zotero_api_url: api::ZOTERO_API.to_string(),
            semantic_scholar_api_url: api::SEMANTIC_SCHOLAR_API.to_string(),
            request_timeout: None,
            connect_timeout: None,
            notification_duration: api::NOTIFICATION_DURATION,
        }
    }

    /// Create a test configuration with both services on one mock server.
    ///
    /// Zotero is served under `/zotero`, Semantic Scholar under `/v1`.
    #[must_use]
    pub fn for_testing(base_url: &str, library: Library) -> Self {
        Self {
            library,
            zotero_api_url: format!("{}/zotero", base_url),
            semantic_scholar_api_url: format!("{}/v1", base_url),
            request_timeout: Some(Duration::from_secs(5)),
            connect_timeout: Some(Duration::from_secs(2)),
            notification_duration: api::NOTIFICATION_DURATION,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `ZOTERO_LIBRARY_ID`, `ZOTERO_LIBRARY_KIND`, `ZOTERO_API_URL` and
    /// `SEMANTIC_SCHOLAR_API_URL`.
    pub fn from_env() -> anyhow::Result<Self> {
        let id = std::env::var("ZOTERO_LIBRARY_ID").unwrap_or_default();
        let kind = match std::env::var("ZOTERO_LIBRARY_KIND") {
            Ok(raw) => raw.parse::<LibraryKind>().map_err(anyhow::Error::msg)?,
            Err(_) => LibraryKind::User,
        };
        let library = Library { kind, id: LibraryId::parse(&id)? };

        let mut config = Self::new(library);
        if let Ok(url) = std::env::var("ZOTERO_API_URL") {
            config.zotero_api_url = url;
        }
        if let Ok(url) = std::env::var("SEMANTIC_SCHOLAR_API_URL") {
            config.semantic_scholar_api_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check that both base URLs parse.
    pub fn validate(&self) -> ConfigResult<()> {
        check_url("Zotero API", &self.zotero_api_url)?;
        check_url("Semantic Scholar API", &self.semantic_scholar_api_url)?;
        Ok(())
    }

    /// Full URL of the library's item listing.
    #[must_use]
    pub fn items_url(&self) -> String {
        format!("{}/{}/items", self.zotero_api_url.trim_end_matches('/'), self.library.path())
    }
}

fn check_url(name: &'static str, value: &str) -> ConfigResult<()> {
    url::Url::parse(value).map(|_| ()).map_err(|e| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(id: &str) -> Library {
        Library::user(LibraryId::parse(id).unwrap())
    }

    #[test]
    fn test_library_id_accepts_digits() {
        let id = LibraryId::parse(" 475425 ").unwrap();
        assert_eq!(id.as_str(), "475425");
    }

    #[test]
    fn test_library_id_rejects_placeholder() {
        assert_eq!(
            LibraryId::parse("YOUR_USER_ID"),
            Err(ConfigError::PlaceholderLibraryId("YOUR_USER_ID".into()))
        );
    }

    #[test]
    fn test_library_id_rejects_empty_and_non_numeric() {
        assert_eq!(LibraryId::parse("   "), Err(ConfigError::MissingLibraryId));
        assert_eq!(LibraryId::parse("12a4"), Err(ConfigError::InvalidLibraryId("12a4".into())));
    }

    #[test]
    fn test_items_url_for_user_and_group() {
        let config = Config::new(library("42"));
        assert_eq!(config.items_url(), "https://api.zotero.org/users/42/items");

        let config = Config::new(Library::group(LibraryId::parse("7").unwrap()));
        assert_eq!(config.items_url(), "https://api.zotero.org/groups/7/items");
    }

    #[test]
    fn test_default_timeouts_are_transport_defaults() {
        let config = Config::new(library("1"));
        assert!(config.request_timeout.is_none());
        assert!(config.connect_timeout.is_none());
        assert_eq!(config.notification_duration, Duration::from_secs(5));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = Config::new(library("1"));
        config.semantic_scholar_api_url = "not a url".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { name: "Semantic Scholar API", .. }));
    }
}
