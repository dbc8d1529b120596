use thiserror::Error;

/// Errors produced while moving a request over the wire
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The caller cancelled the execution context
    #[error("request cancelled")]
    Cancelled,

    /// The execution context deadline elapsed before the response arrived
    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// A configured header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl TransportError {
    /// Whether the call was aborted by the execution context
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

/// Parse error response from HTTP status and body
pub fn parse_error_response(status: reqwest::StatusCode, body: &bytes::Bytes) -> TransportError {
    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|json| extract_error_message(&json))
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());

    TransportError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Extract error message from the JSON error formats providers use
fn extract_error_message(json: &serde_json::Value) -> Option<String> {
    // OpenAI format: {"error": {"message": "..."}}
    if let Some(message) = json
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(serde_json::Value::as_str)
    {
        return Some(message.to_string());
    }

    // {"error": "..."}
    if let Some(message) = json.get("error").and_then(serde_json::Value::as_str) {
        return Some(message.to_string());
    }

    json.get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}
