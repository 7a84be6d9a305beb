use firecrawl_async::types::search::SearchRequest;
use firecrawl_async::{Client, FirecrawlConfig, FirecrawlError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<FirecrawlConfig> {
    let config = FirecrawlConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key");
    Client::with_config(config)
}

fn mock_search_response() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "title": "First Result",
                "url": "https://example.com/1",
                "snippet": "the first snippet"
            },
            {
                "title": "Second Result",
                "url": "https://example.com/2",
                "snippet": "the second snippet"
            }
        ]
    })
}

#[tokio::test]
async fn search_success_parses_in_rank_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_search_response()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .search()
        .create(SearchRequest::new("rust ownership", 2))
        .await
        .unwrap();

    assert_eq!(resp.results.len(), 2);
    assert_eq!(resp.results[0].title.as_deref(), Some("First Result"));
    assert_eq!(resp.results[1].url.as_deref(), Some("https://example.com/2"));
}

#[tokio::test]
async fn search_sends_exact_request_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(serde_json::json!({
            "query": "rust ownership",
            "limit": 5,
            "include_snippets": true,
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .search()
        .create(SearchRequest::new("rust ownership", 5))
        .await
        .unwrap();

    assert!(resp.results.is_empty());
}

#[tokio::test]
async fn search_non_success_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"message": "rate limited"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .search()
        .create(SearchRequest::new("anything", 3))
        .await
        .unwrap_err();

    match err {
        FirecrawlError::Api(obj) => {
            assert_eq!(obj.status_code, Some(429));
            assert_eq!(obj.message, "rate limited");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
