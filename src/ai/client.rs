//! Ollama-compatible text generation client

use std::future::Future;

use anyhow::bail;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::GenerationOptions;
use crate::constants::GENERATE_PATH;
use crate::error::{Error, Result};

/// Something that turns a prompt into generated text.
///
/// [`OllamaClient`] is the real implementation; the seam exists so the
/// orchestrator and the HTTP layer can run against a canned generator.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    model: String,
    options: GenerationOptions,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(flatten)]
    options: &'a GenerationOptions,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: String, options: GenerationOptions) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH),
            model,
            options,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, prompt: &str) -> anyhow::Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: &self.options,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        // Must be a JSON object; arrays and scalars fail to decode
        let body: Map<String, Value> = response.json().await?;

        extract_response(&body)
    }
}

/// Missing or null `response` means the model produced nothing
fn extract_response(body: &Map<String, Value>) -> anyhow::Result<String> {
    match body.get("response") {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.trim().to_string()),
        Some(other) => bail!("unexpected `response` value: {}", other),
    }
}

impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.request(prompt).await.map_err(|e| {
            tracing::warn!("Generation request failed: {:#}", e);
            Error::GenerationFailed(format!("{:#}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OllamaClient {
        OllamaClient::new(
            &server.uri(),
            "tinyllama".to_string(),
            GenerationOptions::default(),
        )
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = OllamaClient::new(
            "http://localhost:11434/",
            "tinyllama".to_string(),
            GenerationOptions::default(),
        );
        assert_eq!(client.endpoint(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_request_body_shape() {
        let options = GenerationOptions::default();
        let request = GenerateRequest {
            model: "tinyllama",
            prompt: "hi",
            stream: false,
            options: &options,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "tinyllama");
        assert_eq!(json["prompt"], "hi");
        assert_eq!(json["stream"], false);
        assert_eq!(json["max_tokens"], 250);
        assert_eq!(json["top_k"], 40);
        assert_eq!(json["num_predict"], 150);
        assert_eq!(json["num_ctx"], 512);
        assert_eq!(json["num_thread"], 8);
        assert_eq!(json["num_gpu"], 1);
        assert!(json["seed"].is_null());
        assert_eq!(json["stop"][0], "</email>");
    }

    #[tokio::test]
    async fn test_generate_success_trims_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(serde_json::json!({
                "model": "tinyllama",
                "prompt": "test prompt",
                "stream": false
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "response": "  Hi there\n" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).generate("test prompt").await.unwrap();
        assert_eq!(result, "Hi there");
    }

    #[tokio::test]
    async fn test_missing_response_field_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "done": true })),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).generate("prompt").await.unwrap();
        assert_eq!(result, "");
    }

    #[tokio::test]
    async fn test_array_body_is_generation_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["Hi"])))
            .mount(&server)
            .await;

        let err = client_for(&server).generate("prompt").await.unwrap_err();
        assert!(matches!(err, Error::GenerationFailed(_)));
        assert!(err.to_string().starts_with("Failed to generate email: "));
    }

    #[tokio::test]
    async fn test_non_string_response_is_generation_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": 42 })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).generate("prompt").await.unwrap_err();
        assert!(matches!(err, Error::GenerationFailed(_)));
        assert!(err.to_string().contains("unexpected `response` value: 42"));
    }

    #[test]
    fn test_null_response_is_empty() {
        let body = serde_json::json!({ "response": null, "done": true });
        let Value::Object(map) = body else {
            panic!("expected an object");
        };
        assert_eq!(extract_response(&map).unwrap(), "");
    }

    #[tokio::test]
    async fn test_http_error_is_generation_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
            .mount(&server)
            .await;

        let err = client_for(&server).generate("prompt").await.unwrap_err();
        assert!(matches!(err, Error::GenerationFailed(_)));
        assert!(err.to_string().contains("Failed to generate email"));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_generation_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json {"))
            .mount(&server)
            .await;

        let err = client_for(&server).generate("prompt").await.unwrap_err();
        assert!(matches!(err, Error::GenerationFailed(_)));
        assert!(err.to_string().starts_with("Failed to generate email: "));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_generation_failed() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = OllamaClient::new(
            "http://127.0.0.1:9",
            "tinyllama".to_string(),
            GenerationOptions::default(),
        );

        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, Error::GenerationFailed(_)));
        assert!(err.to_string().contains("Failed to generate email"));
    }
}
