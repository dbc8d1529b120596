use async_trait::async_trait;
use bytes::Bytes;
use reqwest::RequestBuilder;
use tracing::debug;

use crate::{
    context::CallContext,
    error::{self, TransportError},
    transport::{PreparedRequest, TransportSender},
};

/// Credentials and headers applied to every request
#[derive(Clone, Default)]
pub struct TransportConfig {
    /// Sent as `Authorization: Bearer <token>`
    pub bearer_token: Option<String>,
    pub user_agent: Option<String>,
}

impl std::fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportConfig")
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// reqwest-backed [`TransportSender`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client, config: TransportConfig) -> Self {
        Self { client, config }
    }

    /// Build a reqwest RequestBuilder for the given request
    pub fn build_request(&self, request: &PreparedRequest) -> RequestBuilder {
        let mut req = self.client.request(request.method.clone(), &request.url);

        if let Some(ref token) = self.config.bearer_token {
            req = req.bearer_auth(token);
        }

        if let Some(ref user_agent) = self.config.user_agent {
            req = req.header(reqwest::header::USER_AGENT, user_agent);
        }

        if let Some(ref body) = request.body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        req
    }

    async fn execute(&self, request: PreparedRequest) -> Result<Bytes, TransportError> {
        let req = self
            .build_request(&request)
            .build()
            .map_err(|e| {
                if e.is_builder() {
                    TransportError::InvalidHeader(e.to_string())
                } else {
                    TransportError::Http(e)
                }
            })?;

        let res = self.client.execute(req).await?;
        let status = res.status();
        let bytes = res.bytes().await?;

        debug!(
            url = %request.url,
            status = status.as_u16(),
            bytes = bytes.len(),
            "transport exchange finished"
        );

        if status.is_success() {
            Ok(bytes)
        } else {
            Err(error::parse_error_response(status, &bytes))
        }
    }
}

#[async_trait]
impl TransportSender for HttpTransport {
    async fn send(
        &self,
        request: PreparedRequest,
        ctx: &CallContext,
    ) -> Result<Bytes, TransportError> {
        ctx.run(self.execute(request)).await
    }
}
