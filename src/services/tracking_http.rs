//! Tracking server client implementation using reqwest.
//!
//! Speaks the REST surface of an MLflow-compatible tracking server. Each port
//! operation assembles arguments and performs the minimal sequence of calls;
//! storage and versioning stay on the server side.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, ChainSignature, PromptChain, QualifiedModelName, TrackingConfig};
use crate::ports::{LoggedRun, RegisteredVersion, TrackingClient};

const TRACKING_TOKEN_VAR: &str = "PROMPTLAB_TRACKING_TOKEN";
const DEFAULT_STATUS_MESSAGE: &str = "Tracking server request failed";

/// HTTP transport for the tracking server.
#[derive(Clone)]
pub struct HttpTrackingClient {
    token: Option<String>,
    base_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpTrackingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTrackingClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpTrackingClient {
    /// Create a new HTTP client with an optional bearer token.
    pub fn new(token: Option<String>, config: &TrackingConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::TrackingError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { token, base_url: config.url.clone(), client })
    }

    /// Create from the optional `PROMPTLAB_TRACKING_TOKEN` environment
    /// variable. Local tracking servers typically run unauthenticated.
    pub fn from_env(config: &TrackingConfig) -> Result<Self, AppError> {
        Self::new(std::env::var(TRACKING_TOKEN_VAR).ok(), config)
    }

    fn route(&self, path: &str) -> Result<Url, AppError> {
        self.base_url.join(&format!("api/2.0/mlflow/{}", path)).map_err(|e| {
            AppError::TrackingError {
                message: format!("Invalid tracking route '{}': {}", path, e),
                status: None,
            }
        })
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn execute(&self, builder: RequestBuilder) -> Result<(StatusCode, String), AppError> {
        let response =
            self.authorize(builder).header(CONTENT_TYPE, "application/json").send().map_err(
                |e| AppError::TrackingError {
                    message: format!("HTTP request failed: {}", e),
                    status: None,
                },
            )?;

        let status = response.status();
        let body = response.text().unwrap_or_default();
        Ok((status, body))
    }

    fn create_experiment(&self, name: &str) -> Result<String, AppError> {
        let url = self.route("experiments/create")?;
        let (status, body) =
            self.execute(self.client.post(url).json(&CreateExperimentRequest { name }))?;

        if !status.is_success() {
            return Err(request_failed(status, &body));
        }

        let parsed: CreateExperimentResponse = parse_body(&body, status)?;
        Ok(parsed.experiment_id)
    }
}

fn parse_body<T: DeserializeOwned>(body: &str, status: StatusCode) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::TrackingError {
        message: format!("Failed to parse response: {}", e),
        status: Some(status.as_u16()),
    })
}

fn request_failed(status: StatusCode, body: &str) -> AppError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        if !body.trim().is_empty() {
            body.to_string()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    });

    AppError::TrackingError { message, status: Some(status.as_u16()) }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn error_code(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("error_code").and_then(|code| code.as_str()).map(ToOwned::to_owned)
}

#[derive(Debug, Serialize)]
struct CreateExperimentRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateExperimentResponse {
    experiment_id: String,
}

#[derive(Debug, Deserialize)]
struct GetExperimentResponse {
    experiment: ExperimentInfo,
}

#[derive(Debug, Deserialize)]
struct ExperimentInfo {
    experiment_id: String,
}

#[derive(Debug, Serialize)]
struct CreateRunRequest<'a> {
    experiment_id: &'a str,
    start_time: i64,
}

#[derive(Debug, Deserialize)]
struct CreateRunResponse {
    run: RunEnvelope,
}

#[derive(Debug, Deserialize)]
struct RunEnvelope {
    info: RunInfo,
}

#[derive(Debug, Deserialize)]
struct RunInfo {
    run_id: String,
}

#[derive(Debug, Serialize)]
struct KeyValue {
    key: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct LogBatchRequest<'a> {
    run_id: &'a str,
    params: Vec<KeyValue>,
    tags: Vec<KeyValue>,
}

#[derive(Debug, Serialize)]
struct UpdateRunRequest<'a> {
    run_id: &'a str,
    status: &'a str,
    end_time: i64,
}

#[derive(Debug, Serialize)]
struct CreateRegisteredModelRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateModelVersionRequest<'a> {
    name: &'a str,
    source: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateModelVersionResponse {
    model_version: ModelVersionInfo,
}

#[derive(Debug, Deserialize)]
struct ModelVersionInfo {
    version: String,
}

impl TrackingClient for HttpTrackingClient {
    fn get_or_create_experiment(&self, name: &str) -> Result<String, AppError> {
        let url = self.route("experiments/get-by-name")?;
        let (status, body) =
            self.execute(self.client.get(url).query(&[("experiment_name", name)]))?;

        if status.is_success() {
            let parsed: GetExperimentResponse = parse_body(&body, status)?;
            return Ok(parsed.experiment.experiment_id);
        }

        if status == StatusCode::NOT_FOUND {
            return self.create_experiment(name);
        }

        Err(request_failed(status, &body))
    }

    fn log_chain_run(
        &self,
        experiment_id: &str,
        chain: &PromptChain,
        signature: &ChainSignature,
        artifact_path: &str,
        input_example: &str,
    ) -> Result<LoggedRun, AppError> {
        let url = self.route("runs/create")?;
        let request =
            CreateRunRequest { experiment_id, start_time: chrono::Utc::now().timestamp_millis() };
        let (status, body) = self.execute(self.client.post(url).json(&request))?;
        if !status.is_success() {
            return Err(request_failed(status, &body));
        }
        let created: CreateRunResponse = parse_body(&body, status)?;
        let run_id = created.run.info.run_id;

        let signature_json =
            serde_json::to_string(signature).map_err(|e| AppError::TrackingError {
                message: format!("Failed to serialize signature: {}", e),
                status: None,
            })?;

        let batch = LogBatchRequest {
            run_id: &run_id,
            params: vec![
                KeyValue { key: "template".into(), value: chain.template().name().into() },
                KeyValue {
                    key: "input_variable".into(),
                    value: chain.template().input_variable().into(),
                },
                KeyValue { key: "output_key".into(), value: chain.output_key().into() },
                KeyValue { key: "artifact_path".into(), value: artifact_path.into() },
            ],
            tags: vec![
                KeyValue { key: "chain.signature".into(), value: signature_json },
                KeyValue { key: "chain.input_example".into(), value: input_example.into() },
                KeyValue {
                    key: "chain.template_source".into(),
                    value: chain.template().source().into(),
                },
            ],
        };
        let url = self.route("runs/log-batch")?;
        let (status, body) = self.execute(self.client.post(url).json(&batch))?;
        if !status.is_success() {
            return Err(request_failed(status, &body));
        }

        let update = UpdateRunRequest {
            run_id: &run_id,
            status: "FINISHED",
            end_time: chrono::Utc::now().timestamp_millis(),
        };
        let url = self.route("runs/update")?;
        let (status, body) = self.execute(self.client.post(url).json(&update))?;
        if !status.is_success() {
            return Err(request_failed(status, &body));
        }

        Ok(LoggedRun { run_id })
    }

    fn register_chain(
        &self,
        artifact_uri: &str,
        name: &QualifiedModelName,
    ) -> Result<RegisteredVersion, AppError> {
        let dotted = name.to_string();

        let url = self.route("registered-models/create")?;
        let request = CreateRegisteredModelRequest { name: &dotted };
        let (status, body) = self.execute(self.client.post(url).json(&request))?;
        let already_exists = error_code(&body).as_deref() == Some("RESOURCE_ALREADY_EXISTS");
        if !status.is_success() && !already_exists {
            return Err(request_failed(status, &body));
        }

        let url = self.route("model-versions/create")?;
        let request = CreateModelVersionRequest { name: &dotted, source: artifact_uri };
        let (status, body) = self.execute(self.client.post(url).json(&request))?;
        if !status.is_success() {
            return Err(request_failed(status, &body));
        }
        let created: CreateModelVersionResponse = parse_body(&body, status)?;

        Ok(RegisteredVersion { name: dotted, version: created.model_version.version })
    }
}
