//! HTTP clients for the two remote lookups.
//!
//! - [`ZoteroClient`]: item search in one Zotero library
//! - [`SemanticScholarClient`]: citation metadata for one item
//!
//! Both share one reqwest client with a request-logging middleware. There is
//! no retry, caching, or rate limiting: one call, one request.

mod middleware;
mod semantic;
mod zotero;

pub use middleware::RequestLogging;
pub use semantic::SemanticScholarClient;
pub use zotero::ZoteroClient;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{ResultItem, SupplementalMetadata};

/// Bibliographic search service.
#[async_trait::async_trait]
pub trait ItemSearch: Send + Sync {
    /// Search the library, returning records in response order.
    async fn search_items(&self, query: &str) -> ClientResult<Vec<ResultItem>>;
}

/// Citation metadata service.
#[async_trait::async_trait]
pub trait CitationLookup: Send + Sync {
    /// Look up citation metadata for an item key.
    async fn paper_metadata(&self, key: &str) -> ClientResult<SupplementalMetadata>;
}

/// Build the shared HTTP client.
///
/// Timeouts are only applied when configured; otherwise reqwest's defaults hold.
pub fn build_http_client(config: &Config) -> anyhow::Result<ClientWithMiddleware> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);

    let mut builder = Client::builder()
        .default_headers(headers)
        .user_agent(concat!("zotero-scholar/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(api::MAX_KEEPALIVE)
        .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
        .gzip(true);

    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }

    let client = ClientBuilder::new(builder.build()?).with(RequestLogging).build();
    Ok(client)
}

/// Make a GET request and decode the JSON body.
async fn get_json<T>(
    client: &ClientWithMiddleware,
    url: &str,
    params: &[(&str, &str)],
) -> ClientResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let mut request = client.get(url);
    if !params.is_empty() {
        request = request.query(params);
    }

    let response = request.send().await?;
    let response = handle_response(response).await?;
    let body = response.bytes().await?;

    serde_json::from_slice(&body).map_err(ClientError::from)
}

/// Turn non-success statuses into errors carrying the response body.
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = if text.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_string()
    } else {
        text.trim().to_string()
    };

    tracing::warn!(status = status.as_u16(), %message, "Remote lookup returned an error status");
    Err(ClientError::status(status.as_u16(), message))
}
