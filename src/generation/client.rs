//! HTTP client for the chat-completion API
//!
//! Issues exactly one `POST {base_url}/chat/completions` per call with a fixed
//! system directive, temperature and token budget.

use super::{GenerationClient, GenerationError};
use crate::config::AppConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// System directive sent with every request
pub const SYSTEM_DIRECTIVE: &str = "You are a helpful assistant that generates medical forms.";

/// Sampling temperature
pub const TEMPERATURE: f32 = 0.3;

/// Maximum completion tokens
pub const MAX_TOKENS: u32 = 1500;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat-completion client backed by `reqwest`
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key_env: String,
}

impl OpenAiClient {
    /// Create a new client from configuration.
    ///
    /// No credential check happens here; the key is read on every call.
    pub fn new(config: &AppConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            GenerationError::ClientUnavailable(format!("HTTP client could not be created: {e}"))
        })?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            model: config.model().to_string(),
            api_key_env: config.api_key_env().to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Read the API key from the environment
    fn api_key(&self) -> Result<String, GenerationError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(GenerationError::ClientUnavailable(format!(
                "{} is not set. Export your API key, or enable demo mode.",
                self.api_key_env
            ))),
        }
    }

    /// Turn a non-success response into a `RequestFailed` description
    async fn api_error(response: reqwest::Response) -> GenerationError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(String::from))
            .unwrap_or(body);

        GenerationError::RequestFailed(format!("API error {status}: {message}"))
    }
}

#[async_trait]
impl GenerationClient for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.api_key()?;

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_DIRECTIVE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::info!("Requesting completion from {} ({})", self.base_url, self.model);
        tracing::debug!("Prompt: {prompt}");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::api_error(response).await;
            tracing::warn!("{err}");
            return Err(err);
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::RequestFailed("API returned no completion".to_string()))
    }

    fn describe(&self) -> String {
        format!("{} via {}", self.model, self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{bearer_token, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Each test uses its own variable so parallel tests don't interfere
    fn config_for(server: &MockServer, key_env: &str) -> AppConfig {
        AppConfig {
            base_url: Some(format!("{}/v1", server.uri())),
            api_key_env: Some(key_env.to_string()),
            ..Default::default()
        }
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"}
            ]
        })
    }

    #[test]
    fn test_new_uses_config_defaults() {
        let client = OpenAiClient::new(&AppConfig::default()).unwrap();
        assert_eq!(client.model, "gpt-3.5-turbo");
        assert_eq!(
            client.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            client.describe(),
            "gpt-3.5-turbo via https://api.openai.com/v1"
        );
    }

    #[tokio::test]
    async fn test_sends_fixed_request_and_returns_first_choice() {
        let server = MockServer::start().await;
        std::env::set_var("SMARTDOC_TEST_KEY_SUCCESS", "test-key");

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(bearer_token("test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 1500,
                "messages": [
                    {"role": "system", "content": SYSTEM_DIRECTIVE},
                    {"role": "user", "content": "Create a form"}
                ]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion("<h2>Intake</h2>\n<p>x</p>")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&config_for(&server, "SMARTDOC_TEST_KEY_SUCCESS")).unwrap();
        let html = client.generate("Create a form").await.unwrap();
        assert_eq!(html, "<h2>Intake</h2>\n<p>x</p>");
    }

    #[tokio::test]
    async fn test_request_body_carries_temperature() {
        let server = MockServer::start().await;
        std::env::set_var("SMARTDOC_TEST_KEY_BODY", "k");

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&config_for(&server, "SMARTDOC_TEST_KEY_BODY")).unwrap();
        client.generate("p").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let temperature = body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let server = MockServer::start().await;
        std::env::remove_var("SMARTDOC_TEST_KEY_MISSING");

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("never")))
            .expect(0)
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&config_for(&server, "SMARTDOC_TEST_KEY_MISSING")).unwrap();
        let err = client.generate("p").await.unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("SMARTDOC_TEST_KEY_MISSING"));
    }

    #[tokio::test]
    async fn test_blank_key_is_treated_as_missing() {
        let server = MockServer::start().await;
        std::env::set_var("SMARTDOC_TEST_KEY_BLANK", "   ");

        let client = OpenAiClient::new(&config_for(&server, "SMARTDOC_TEST_KEY_BLANK")).unwrap();
        let err = client.generate("p").await.unwrap_err();
        assert!(matches!(err, GenerationError::ClientUnavailable(_)));
    }

    #[tokio::test]
    async fn test_api_error_maps_to_request_failed() {
        let server = MockServer::start().await;
        std::env::set_var("SMARTDOC_TEST_KEY_RATE", "k");

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"message": "Rate limit reached", "type": "requests"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&config_for(&server, "SMARTDOC_TEST_KEY_RATE")).unwrap();
        let err = client.generate("p").await.unwrap_err();
        match err {
            GenerationError::RequestFailed(message) => {
                assert!(message.contains("429"), "{message}");
                assert!(message.contains("Rate limit reached"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_request_failed() {
        let server = MockServer::start().await;
        std::env::set_var("SMARTDOC_TEST_KEY_MALFORMED", "k");

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client =
            OpenAiClient::new(&config_for(&server, "SMARTDOC_TEST_KEY_MALFORMED")).unwrap();
        let err = client.generate("p").await.unwrap_err();
        assert!(matches!(err, GenerationError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_maps_to_request_failed() {
        let server = MockServer::start().await;
        std::env::set_var("SMARTDOC_TEST_KEY_EMPTY", "k");

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&config_for(&server, "SMARTDOC_TEST_KEY_EMPTY")).unwrap();
        let err = client.generate("p").await.unwrap_err();
        assert_eq!(
            err,
            GenerationError::RequestFailed("API returned no completion".to_string())
        );
    }

    #[tokio::test]
    async fn test_each_call_is_one_request() {
        let server = MockServer::start().await;
        std::env::set_var("SMARTDOC_TEST_KEY_NOCACHE", "k");

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("same")))
            .expect(2)
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&config_for(&server, "SMARTDOC_TEST_KEY_NOCACHE")).unwrap();
        client.generate("identical").await.unwrap();
        client.generate("identical").await.unwrap();
    }
}
