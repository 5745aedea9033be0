//! HTTP client tests against wiremock.
//!
//! Verifies request shape for both services and how each failure kind surfaces.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zotero_scholar::client::{CitationLookup, ItemSearch, SemanticScholarClient, ZoteroClient};
use zotero_scholar::config::{Config, Library, LibraryId};
use zotero_scholar::error::ClientError;

fn library() -> Library {
    Library::user(LibraryId::parse("42").unwrap())
}

fn zotero(server: &MockServer) -> ZoteroClient {
    ZoteroClient::new(&Config::for_testing(&server.uri(), library())).unwrap()
}

fn semantic(server: &MockServer) -> SemanticScholarClient {
    SemanticScholarClient::new(&Config::for_testing(&server.uri(), library())).unwrap()
}

fn zotero_item(key: &str, title: &str, last_names: &[&str]) -> serde_json::Value {
    let creators: Vec<_> = last_names
        .iter()
        .map(|n| json!({"creatorType": "author", "firstName": "A.", "lastName": n}))
        .collect();
    json!({
        "key": key,
        "version": 1,
        "library": {"type": "user", "id": 42},
        "data": {"key": key, "itemType": "journalArticle", "title": title, "creators": creators}
    })
}

// =============================================================================
// Zotero search
// =============================================================================

#[tokio::test]
async fn test_search_sends_query_format_and_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zotero/users/42/items"))
        .and(query_param("q", "graph theory"))
        .and(query_param("format", "json"))
        .and(query_param("v", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([zotero_item(
            "A1",
            "Graphs",
            &["Euler"]
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let items = zotero(&server).search_items("graph theory").await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].key, "A1");
    assert_eq!(items[0].title_or_default(), "Graphs");
    assert_eq!(items[0].creator_names(), "Euler");
}

#[tokio::test]
async fn test_empty_query_is_sent_as_is() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zotero/users/42/items"))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let items = zotero(&server).search_items("").await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_group_library_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zotero/groups/7/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::for_testing(&server.uri(), Library::group(LibraryId::parse("7").unwrap()));
    let client = ZoteroClient::new(&config).unwrap();
    assert!(client.search_items("x").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_results_keep_response_order_and_duplicates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zotero/users/42/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            zotero_item("Z9", "Zeta", &[]),
            zotero_item("A1", "Alpha", &["Doe", "Roe"]),
            zotero_item("Z9", "Zeta", &[]),
        ])))
        .mount(&server)
        .await;

    let items = zotero(&server).search_items("q").await.unwrap();
    let keys: Vec<_> = items.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, ["Z9", "A1", "Z9"]);
    assert_eq!(items[1].creator_names(), "Doe, Roe");
}

#[tokio::test]
async fn test_search_through_trait_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zotero/users/42/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([zotero_item("A1", "T", &[])])))
        .mount(&server)
        .await;

    let search: Box<dyn ItemSearch> = Box::new(zotero(&server));
    assert_eq!(search.search_items("t").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_status_error_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zotero/users/42/items"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let err = zotero(&server).search_items("q").await.unwrap_err();
    assert_eq!(err.status_code(), Some(403));
    assert!(err.to_string().contains("Forbidden"));
}

#[tokio::test]
async fn test_search_status_error_without_body_uses_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zotero/users/42/items"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = zotero(&server).search_items("q").await.unwrap_err();
    assert!(err.to_string().contains("Service Unavailable"), "{err}");
}

#[tokio::test]
async fn test_search_malformed_payload_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zotero/users/42/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "an array"})))
        .mount(&server)
        .await;

    let err = zotero(&server).search_items("q").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_search_connection_refused_is_transport_error() {
    let config = Config::for_testing("http://127.0.0.1:1", library());
    let client = ZoteroClient::new(&config).unwrap();

    let err = client.search_items("q").await.unwrap_err();
    assert!(err.is_transport(), "{err:?}");
}

// =============================================================================
// Semantic Scholar metadata
// =============================================================================

#[tokio::test]
async fn test_paper_metadata_by_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/paper/A1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"citationCount": 42, "influentialCitationCount": 7})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let meta = semantic(&server).paper_metadata("A1").await.unwrap();
    assert_eq!(meta.citation_count, Some(42));
    assert_eq!(meta.influential_citation_count, Some(7));
}

#[tokio::test]
async fn test_paper_metadata_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/paper/MISSING"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Paper not found"})))
        .mount(&server)
        .await;

    let err = semantic(&server).get_paper("MISSING").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(err.to_string().contains("Paper not found"));
}

#[tokio::test]
async fn test_paper_metadata_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/paper/A1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json here"))
        .mount(&server)
        .await;

    let err = semantic(&server).get_paper("A1").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_no_retry_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/paper/A1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(semantic(&server).get_paper("A1").await.is_err());
}

#[test]
fn test_client_debug_shows_endpoint() {
    let config = Config::new(library());
    let client = ZoteroClient::new(&config).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("https://api.zotero.org/users/42/items"));
}
