//! Zotero web API client.

use reqwest_middleware::ClientWithMiddleware;

use super::{ItemSearch, build_http_client, get_json};
use crate::config::{Config, Library, api};
use crate::error::ClientResult;
use crate::models::ResultItem;

/// Searches the items of one Zotero library.
#[derive(Clone)]
pub struct ZoteroClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Library being searched.
    library: Library,

    /// `{base}/{users|groups}/{id}/items`.
    items_url: String,
}

impl ZoteroClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = build_http_client(config)?;
        Ok(Self::with_http_client(client, config))
    }

    /// Create a client sharing an existing HTTP client.
    #[must_use]
    pub fn with_http_client(client: ClientWithMiddleware, config: &Config) -> Self {
        Self { client, library: config.library.clone(), items_url: config.items_url() }
    }

    /// The library this client searches.
    #[must_use]
    pub const fn library(&self) -> &Library {
        &self.library
    }

    /// Search items matching a free-text query.
    ///
    /// The query is sent as-is, including when empty.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body that
    /// is not a JSON array of items.
    pub async fn search_items(&self, query: &str) -> ClientResult<Vec<ResultItem>> {
        let params = [
            ("q", query),
            ("format", api::ZOTERO_FORMAT),
            ("v", api::ZOTERO_API_VERSION),
        ];

        tracing::debug!(library = %self.library.path(), query, "Searching Zotero items");
        let items: Vec<ResultItem> = get_json(&self.client, &self.items_url, &params).await?;
        tracing::debug!(count = items.len(), "Zotero search returned");

        Ok(items)
    }
}

#[async_trait::async_trait]
impl ItemSearch for ZoteroClient {
    async fn search_items(&self, query: &str) -> ClientResult<Vec<ResultItem>> {
        Self::search_items(self, query).await
    }
}

impl std::fmt::Debug for ZoteroClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoteroClient").field("items_url", &self.items_url).finish()
    }
}
