//! Completion endpoint client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, EndpointConfig};
use crate::ports::CompletionClient;

const ENDPOINT_TOKEN_VAR: &str = "PROMPTLAB_ENDPOINT_TOKEN";
const DEFAULT_STATUS_MESSAGE: &str = "Completion endpoint request failed";

/// HTTP transport for a hosted chat-completion endpoint.
///
/// Performs exactly one request per call. No retry, caching, or batching;
/// failures surface to the caller unchanged.
#[derive(Clone)]
pub struct HttpCompletionClient {
    token: String,
    endpoint_url: Url,
    max_tokens: Option<u32>,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("endpoint_url", &self.endpoint_url)
            .field("max_tokens", &self.max_tokens)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API token and configuration.
    pub fn new(token: String, config: &EndpointConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::EndpointError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            token,
            endpoint_url: config.url.clone(),
            max_tokens: config.max_tokens,
            client,
        })
    }

    /// Create from the `PROMPTLAB_ENDPOINT_TOKEN` environment variable.
    pub fn from_env(config: &EndpointConfig) -> Result<Self, AppError> {
        let token = std::env::var(ENDPOINT_TOKEN_VAR)
            .map_err(|_| AppError::EnvironmentVariableMissing(ENDPOINT_TOKEN_VAR.into()))?;

        Self::new(token, config)
    }

    fn send_request(&self, request: &ChatRequest<'_>) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.endpoint_url.clone())
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::EndpointError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let chat_response: ChatResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::EndpointError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let choice =
                chat_response.choices.into_iter().next().ok_or_else(|| AppError::EndpointError {
                    message: "No choices in response".into(),
                    status: Some(status.as_u16()),
                })?;

            return Ok(choice.message.content);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::EndpointError { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            messages: vec![ChatMessage { role: "user", content: prompt }],
            max_tokens: self.max_tokens,
        };

        self.send_request(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(server: &mockito::Server, max_tokens: Option<u32>) -> EndpointConfig {
        EndpointConfig {
            url: Url::parse(&server.url()).unwrap(),
            timeout_secs: 1,
            max_tokens,
        }
    }

    #[test]
    fn complete_returns_first_choice_verbatim() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"  spaced output\n"}}]}"#)
            .create();

        let client =
            HttpCompletionClient::new("fake-token".to_string(), &config_for(&server, Some(400)))
                .unwrap();

        let result = client.complete("hello").unwrap();
        assert_eq!(result, "  spaced output\n");
    }

    #[test]
    fn complete_sends_configured_max_tokens() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "max_tokens": 400,
                "messages": [{"role": "user", "content": "hello"}],
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create();

        let client =
            HttpCompletionClient::new("fake-token".to_string(), &config_for(&server, Some(400)))
                .unwrap();

        client.complete("hello").unwrap();
        mock.assert();
    }

    #[test]
    fn complete_omits_max_tokens_when_unset() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "messages": [{"role": "user", "content": "hello"}],
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create();

        let client =
            HttpCompletionClient::new("fake-token".to_string(), &config_for(&server, None))
                .unwrap();

        client.complete("hello").unwrap();
        mock.assert();
    }

    #[test]
    fn complete_returns_server_error_on_500() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/").with_status(500).expect(1).create();

        let client =
            HttpCompletionClient::new("fake-token".to_string(), &config_for(&server, None))
                .unwrap();

        let err = client.complete("hello").unwrap_err();
        match err {
            AppError::EndpointError { message, status } => {
                assert_eq!(status, Some(500));
                assert_eq!(message, "Server error");
            }
            other => panic!("unexpected error variant: {}", other),
        }
        mock.assert();
    }

    #[test]
    fn complete_returns_rate_limit_on_429() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/").with_status(429).expect(1).create();

        let client =
            HttpCompletionClient::new("fake-token".to_string(), &config_for(&server, None))
                .unwrap();

        let err = client.complete("hello").unwrap_err();
        match err {
            AppError::EndpointError { status, .. } => assert_eq!(status, Some(429)),
            other => panic!("unexpected error variant: {}", other),
        }
        mock.assert();
    }

    #[test]
    fn parses_nested_error_message() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/")
            .with_status(503)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"endpoint scaling up"}}"#)
            .expect(1)
            .create();

        let client =
            HttpCompletionClient::new("fake-token".to_string(), &config_for(&server, None))
                .unwrap();

        let err = client.complete("hello").unwrap_err();
        match err {
            AppError::EndpointError { message, status } => {
                assert_eq!(status, Some(503));
                assert_eq!(message, "endpoint scaling up");
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    #[serial_test::serial]
    fn from_env_requires_token() {
        unsafe {
            std::env::remove_var(ENDPOINT_TOKEN_VAR);
        }

        let err = HttpCompletionClient::from_env(&EndpointConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::EnvironmentVariableMissing(_)));
    }

    #[test]
    #[serial_test::serial]
    fn from_env_reads_token() {
        unsafe {
            std::env::set_var(ENDPOINT_TOKEN_VAR, "t0");
        }

        assert!(HttpCompletionClient::from_env(&EndpointConfig::default()).is_ok());

        unsafe {
            std::env::remove_var(ENDPOINT_TOKEN_VAR);
        }
    }

    #[test]
    fn empty_choices_is_an_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create();

        let client =
            HttpCompletionClient::new("fake-token".to_string(), &config_for(&server, None))
                .unwrap();

        let err = client.complete("hello").unwrap_err();
        assert!(matches!(err, AppError::EndpointError { .. }));
    }
}
