use serde_json::Value;

/// Errors from the AI gateway.
///
/// None of these are fatal to the caller: the API layer maps every
/// variant to an HTTP 500 with the upstream detail attached when one
/// exists.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// No API credential was configured for this process.
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("AI request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("AI endpoint returned status {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Parsed response body, `Null` when the body was not JSON.
        body: Value,
    },
}

impl AiError {
    /// Upstream error detail for the `details` field of an error
    /// response, mirroring what the endpoint reported when available.
    pub fn upstream_detail(&self) -> Option<Value> {
        match self {
            AiError::MissingApiKey => Some(Value::String(self.to_string())),
            AiError::Request(err) => Some(Value::String(err.to_string())),
            AiError::Api { body, .. } if !body.is_null() => Some(body.clone()),
            AiError::Api { status, .. } => {
                Some(Value::String(format!("upstream returned status {status}")))
            }
        }
    }
}
