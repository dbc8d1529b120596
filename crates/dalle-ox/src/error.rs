use ox_transport::TransportError;
use serde::{Serialize, Serializer, ser::SerializeStruct};
use thiserror::Error;

/// Errors that can occur when generating images
#[derive(Debug, Error)]
pub enum DallERequestError {
    /// The prompt was empty. Detected before any I/O.
    #[error("Image prompt must not be empty")]
    EmptyPrompt,

    /// The model is not on the allow-list. Detected before any I/O.
    #[error("Unsupported image model: {0}")]
    UnsupportedModel(String),

    /// The HTTP exchange failed, including cancellation and deadline expiry
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body did not match the expected shape
    #[error("Failed to decode image response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request could not be serialized
    #[error("Failed to encode image request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Missing API key
    #[error("Missing API key")]
    MissingApiKey,
}

impl DallERequestError {
    /// Whether the call was aborted by the caller's execution context
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_cancelled())
    }
}

impl Serialize for DallERequestError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DallERequestError::EmptyPrompt => {
                let mut state = serializer.serialize_struct("DallERequestError", 1)?;
                state.serialize_field("type", "EmptyPrompt")?;
                state.end()
            }
            DallERequestError::UnsupportedModel(model) => {
                let mut state = serializer.serialize_struct("DallERequestError", 2)?;
                state.serialize_field("type", "UnsupportedModel")?;
                state.serialize_field("model", model)?;
                state.end()
            }
            DallERequestError::Transport(TransportError::Api { status, message }) => {
                let mut state = serializer.serialize_struct("DallERequestError", 3)?;
                state.serialize_field("type", "ApiError")?;
                state.serialize_field("status", status)?;
                state.serialize_field("message", message)?;
                state.end()
            }
            DallERequestError::Transport(e) => {
                let mut state = serializer.serialize_struct("DallERequestError", 2)?;
                state.serialize_field("type", "TransportError")?;
                state.serialize_field("error", &e.to_string())?;
                state.end()
            }
            DallERequestError::Decode(e) => {
                let mut state = serializer.serialize_struct("DallERequestError", 2)?;
                state.serialize_field("type", "DecodeError")?;
                state.serialize_field("error", &e.to_string())?;
                state.end()
            }
            DallERequestError::Encode(e) => {
                let mut state = serializer.serialize_struct("DallERequestError", 2)?;
                state.serialize_field("type", "EncodeError")?;
                state.serialize_field("error", &e.to_string())?;
                state.end()
            }
            DallERequestError::MissingApiKey => {
                let mut state = serializer.serialize_struct("DallERequestError", 1)?;
                state.serialize_field("type", "MissingApiKey")?;
                state.end()
            }
        }
    }
}
