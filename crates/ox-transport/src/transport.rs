use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;

use crate::{context::CallContext, error::TransportError};

/// A fully-addressed request, ready to hand to a [`TransportSender`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    /// Serialized JSON body, if any
    pub body: Option<Vec<u8>>,
}

impl PreparedRequest {
    pub fn post_json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Performs the network exchange for a prepared request.
///
/// Implementations own headers, authentication and any retry policy. They
/// must honour `ctx`: a cancelled context or an elapsed deadline ends the
/// call with [`TransportError::Cancelled`] or [`TransportError::DeadlineExceeded`].
/// On success the raw response body is returned.
#[async_trait]
pub trait TransportSender: Send + Sync {
    async fn send(
        &self,
        request: PreparedRequest,
        ctx: &CallContext,
    ) -> Result<Bytes, TransportError>;
}
