//! Semantic Scholar v1 paper client.

use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use super::{CitationLookup, build_http_client, get_json};
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::SupplementalMetadata;

/// Fetches citation metadata for a single paper.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// v1 API base URL.
    api_url: String,
}

impl SemanticScholarClient {
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
        Self { client, api_url: config.semantic_scholar_api_url.clone() }
    }

    /// URL of the paper endpoint for an identifier.
    ///
    /// The identifier is percent-encoded as a single path segment.
    pub fn paper_url(&self, paper_id: &str) -> ClientResult<Url> {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|()| ClientError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("paper")
            .push(paper_id);
        Ok(url)
    }

    /// Get citation metadata for a paper identifier.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body that
    /// is not a JSON object.
    pub async fn get_paper(&self, paper_id: &str) -> ClientResult<SupplementalMetadata> {
        let url = self.paper_url(paper_id)?;

        tracing::debug!(paper_id, "Fetching Semantic Scholar metadata");
        get_json(&self.client, url.as_str(), &[]).await
    }
}

#[async_trait::async_trait]
impl CitationLookup for SemanticScholarClient {
    async fn paper_metadata(&self, key: &str) -> ClientResult<SupplementalMetadata> {
        self.get_paper(key).await
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient").field("api_url", &self.api_url).finish()
    }
}
