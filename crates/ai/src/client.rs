//! HTTP client for the generateContent endpoint.

use std::time::Duration;

use serde_json::Value;

use crate::error::AiError;
use crate::extract;
use crate::prompt::{self, TaskCard};

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Endpoint used when `GEMINI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Upper bound on one generation call. There is no cancellation once a
/// request is in flight; the timeout is the only bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Gateway configuration, read once at process start and passed into the
/// client. No ambient global state.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API credential. `None` makes every call fail with
    /// [`AiError::MissingApiKey`] without touching the network.
    pub api_key: Option<String>,
    /// Model identifier addressed by the endpoint path.
    pub model: String,
    /// Base URL of the endpoint, overridable for tests.
    pub base_url: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default                                        |
    /// |-------------------|------------------------------------------------|
    /// | `GEMINI_API_KEY`  | unset                                          |
    /// | `GEMINI_MODEL`    | `gemini-2.5-flash`                             |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`    |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// A normalized reply: the extracted text plus the raw response body.
#[derive(Debug, Clone)]
pub struct AiReply {
    pub text: String,
    pub raw: Value,
}

/// Stateless client for the generateContent endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    config: AiConfig,
}

impl GeminiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Summarize a task collection: 1-2 line summary, per-status action
    /// list, top 3 next priorities.
    pub async fn summarize(&self, tasks: &[TaskCard]) -> Result<AiReply, AiError> {
        self.generate(&prompt::summarize_prompt(tasks), None).await
    }

    /// Answer a question about a single card, concisely.
    pub async fn answer(&self, card: &TaskCard, question: &str) -> Result<AiReply, AiError> {
        self.generate(&prompt::answer_prompt(card, question), None).await
    }

    /// Send one single-turn generation request and normalize the reply.
    async fn generate(
        &self,
        prompt_text: &str,
        generation_config: Option<Value>,
    ) -> Result<AiReply, AiError> {
        let api_key = self.config.api_key.as_deref().ok_or(AiError::MissingApiKey)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let mut body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt_text }] }],
        });
        if let Some(config) = generation_config {
            body["generationConfig"] = config;
        }

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            tracing::warn!(status = status.as_u16(), "AI endpoint returned an error");
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.json::<Value>().await?;
        let text = extract::extract_text(&raw);
        Ok(AiReply { text, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn config_without_key() -> AiConfig {
        AiConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let client = GeminiClient::new(config_without_key());
        let result = client.summarize(&[]).await;
        assert_matches!(result, Err(AiError::MissingApiKey));
    }

    #[test]
    fn missing_key_detail_is_a_string() {
        let detail = AiError::MissingApiKey.upstream_detail().unwrap();
        assert_eq!(detail, serde_json::json!("GEMINI_API_KEY is not set"));
    }

    #[test]
    fn api_error_detail_prefers_upstream_body() {
        let err = AiError::Api {
            status: 429,
            body: serde_json::json!({"error": {"message": "quota"}}),
        };
        assert_eq!(
            err.upstream_detail().unwrap(),
            serde_json::json!({"error": {"message": "quota"}})
        );

        let opaque = AiError::Api {
            status: 502,
            body: serde_json::Value::Null,
        };
        assert_eq!(
            opaque.upstream_detail().unwrap(),
            serde_json::json!("upstream returned status 502")
        );
    }
}
