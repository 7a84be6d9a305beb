use std::time::Duration;

use firecrawl_async::FirecrawlConfig;
use groq_async::GroqConfig;
use web_research::resources::{search_listing, website_content, website_metadata};
use web_research::{AppConfig, WebResearch};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_state(firecrawl: &MockServer) -> WebResearch {
    WebResearch::new(AppConfig {
        firecrawl: FirecrawlConfig::new()
            .with_api_base(firecrawl.uri())
            .with_api_key("fc-test-key"),
        groq: GroqConfig::new()
            .with_api_base("http://127.0.0.1:1")
            .with_api_key("gq-test-key"),
        default_search_limit: 5,
        request_timeout: Duration::from_secs(5),
    })
}

#[tokio::test]
async fn website_content_returns_text() {
    let firecrawl = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "the page text",
            "metadata": {},
            "links": []
        })))
        .mount(&firecrawl)
        .await;

    let state = test_state(&firecrawl);
    let out = website_content(&state, "https://example.com").await.unwrap();
    assert_eq!(out, "the page text");
}

#[tokio::test]
async fn website_content_empty_page_placeholder() {
    let firecrawl = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&firecrawl)
        .await;

    let state = test_state(&firecrawl);
    let out = website_content(&state, "https://example.com").await.unwrap();
    assert_eq!(out, "No content found");
}

#[tokio::test]
async fn search_listing_formats_numbered_results() {
    let firecrawl = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(serde_json::json!({"limit": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"title": "First", "url": "https://example.com/1", "snippet": "one"},
                {"title": "Second"}
            ]
        })))
        .expect(1)
        .mount(&firecrawl)
        .await;

    let state = test_state(&firecrawl);
    let out = search_listing(&state, "rust", 2).await.unwrap();

    assert_eq!(
        out,
        "Result 1:\n\
         Title: First\n\
         URL: https://example.com/1\n\
         Snippet: one\n\
         \n\
         Result 2:\n\
         Title: Second\n\
         URL: No URL\n\
         Snippet: No snippet\n"
    );
}

#[tokio::test]
async fn website_metadata_substitutes_defaults() {
    let firecrawl = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "metadata": {"title": "Only a Title"}
        })))
        .mount(&firecrawl)
        .await;

    let state = test_state(&firecrawl);
    let out = website_metadata(&state, "https://example.com").await.unwrap();

    assert_eq!(
        out,
        "Title: Only a Title\n\
         Description: No description\n\
         Author: No author\n\
         Published: No date"
    );
}

#[tokio::test]
async fn upstream_failure_propagates_with_status() {
    let firecrawl = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&firecrawl)
        .await;

    let state = test_state(&firecrawl);
    let err = website_metadata(&state, "https://example.com").await.unwrap_err();
    assert!(err.to_string().contains("404"));
}
