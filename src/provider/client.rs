use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::time::timeout;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::config::{Config, ConfigError, CredentialStatus, SecureString};
use crate::provider::error::{head, ProviderError};

/// One prompt plus its expected reply shape.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
    /// When set, the service is asked for `application/json` matching this
    /// schema. When unset the reply is free text.
    pub response_schema: Option<Value>,
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    /// Free-text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
            temperature: None,
        }
    }

    /// JSON request with a declared response schema.
    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Client for the remote generateContent API.
///
/// One attempt per user action from the caller's point of view; internally
/// transport failures and 5xx replies get a bounded retry with exponential
/// backoff before the error surfaces.
pub struct GenerativeClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: SecureString,
    request_timeout: Duration,
    max_retries: u32,
    backoff_base: Duration,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerativeClient {
    /// Build a client from the loaded configuration.
    ///
    /// Fails when the credential cannot be resolved; callers treat that as
    /// fatal before the UI starts.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let api_key = match config.ai.resolve_credential() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                return Err(ConfigError::ValidationError {
                    message: format!("AI service credential missing: {}", reason),
                });
            }
        };

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(
                config.defaults.connect_timeout_seconds as u64,
            ))
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self {
            http,
            base_url: config.ai.base_url.trim_end_matches('/').to_string(),
            model: config.ai.model.clone(),
            api_key,
            request_timeout: Duration::from_secs(config.defaults.timeout_seconds as u64),
            max_retries: config.defaults.max_retries,
            backoff_base: Duration::from_millis(config.defaults.retry_backoff_base_ms),
        })
    }

    /// Send one generate call and return the concatenated candidate text.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, ProviderError> {
        let request_id = Uuid::new_v4();
        let mut attempt: u32 = 0;

        loop {
            match self.attempt(request).await {
                Ok(text) => {
                    debug!(%request_id, attempt, chars = text.len(), "generate call succeeded");
                    return Ok(text);
                }
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    let backoff = self.backoff_base * 2u32.saturating_pow(attempt);
                    warn!(%request_id, attempt, error = %err, "generate call failed, retrying");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(%request_id, attempt, error = %err, "generate call failed");
                    return Err(err);
                }
            }
        }
    }

    async fn attempt(&self, request: &GenerateRequest) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let mut body = json!({
            "contents": [{ "parts": [{ "text": request.prompt }] }],
        });
        let mut generation_config = serde_json::Map::new();
        if let Some(schema) = &request.response_schema {
            generation_config.insert("responseMimeType".to_string(), json!("application/json"));
            generation_config.insert("responseSchema".to_string(), schema.clone());
        }
        if let Some(temperature) = request.temperature {
            generation_config.insert("temperature".to_string(), json!(temperature));
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = Value::Object(generation_config);
        }

        let exchange = async {
            let response = self
                .http
                .post(&url)
                .header("x-goog-api-key", self.api_key.expose())
                .json(&body)
                .send()
                .await
                .map_err(|source| ProviderError::Connection { source })?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|source| ProviderError::Connection { source })?;
            Ok::<_, ProviderError>((status, text))
        };

        let (status, text) = match timeout(self.request_timeout, exchange).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(ProviderError::Timeout {
                    duration: self.request_timeout.as_secs(),
                });
            }
        };

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body_head: head(&text),
            });
        }

        let reply: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::InvalidJson {
                detail: e.to_string(),
                payload_head: head(&text),
            })?;

        let mut combined = String::new();
        if let Some(candidate) = reply.candidates.into_iter().next() {
            if let Some(content) = candidate.content {
                for part in content.parts {
                    if let Some(text) = part.text {
                        combined.push_str(&text);
                    }
                }
            }
        }

        if combined.is_empty() {
            return Err(ProviderError::EmptyReply);
        }
        Ok(combined)
    }
}
