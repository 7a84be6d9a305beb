use groq_async::types::chat::ChatRequest;
use groq_async::{Client, GroqConfig, GroqError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<GroqConfig> {
    let config = GroqConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key")
        .with_model("llama3-70b-8192");
    Client::with_config(config)
}

fn mock_completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
}

#[tokio::test]
async fn create_sends_exact_request_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_json(serde_json::json!({
            "model": "llama3-70b-8192",
            "messages": [{"role": "user", "content": "write a haiku"}],
            "temperature": 0.7,
            "max_tokens": 1024,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("a haiku")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .chat()
        .create(ChatRequest::user("llama3-70b-8192", "write a haiku"))
        .await
        .unwrap();

    assert_eq!(resp.first_content(), Some("a haiku"));
}

#[tokio::test]
async fn generate_returns_first_choice_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let text = client.chat().generate("prompt").await.unwrap();
    assert_eq!(text, "first");
}

#[tokio::test]
async fn generate_empty_choices_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.chat().generate("prompt").await.unwrap_err();
    assert!(matches!(err, GroqError::EmptyResponse));
}

#[tokio::test]
async fn summarize_embeds_word_limit_and_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_json(serde_json::json!({
            "model": "llama3-70b-8192",
            "messages": [{
                "role": "user",
                "content": "Please summarize the following content in a concise way, \
                            maximum 300 words:\n\nlong article text"
            }],
            "temperature": 0.7,
            "max_tokens": 1024,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("a summary")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let text = client.chat().summarize("long article text", 300).await.unwrap();
    assert_eq!(text, "a summary");
}

#[tokio::test]
async fn non_success_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.chat().generate("prompt").await.unwrap_err();

    match err {
        GroqError::Api(obj) => {
            assert_eq!(obj.status_code, Some(503));
            assert_eq!(obj.message, "overloaded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
