use std::fmt;
use std::sync::Arc;

use bon::Builder;
use ox_transport::{
    Bytes, CallContext, HttpTransport, PreparedRequest, TransportConfig, TransportError,
    TransportSender,
};
use tracing::debug;

use crate::{DallERequestError, ImageRequest, ImageResponse, request::ImageRequestBuilder};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const IMAGES_ENDPOINT: &str = "images/generations";

/// OpenAI image generation client
#[derive(Clone, Builder)]
pub struct DallE {
    /// API key for authentication
    #[builder(into)]
    api_key: String,

    /// Base URL for the API (allows for custom endpoints)
    #[builder(default = DEFAULT_BASE_URL.to_string(), into)]
    pub base_url: String,

    /// Sent as the `user-agent` header by the default transport
    #[builder(into)]
    user_agent: Option<String>,

    /// HTTP client for the default transport
    #[builder(skip)]
    client: reqwest::Client,

    /// Replaces the default transport when set
    #[builder(skip)]
    transport: Option<Arc<dyn TransportSender>>,
}

impl fmt::Debug for DallE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DallE")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

impl DallE {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client from the `OPENAI_API_KEY` environment variable
    pub fn from_env() -> Result<Self, DallERequestError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(DallERequestError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Send requests through `transport` instead of the built-in reqwest transport.
    ///
    /// The custom transport is responsible for authentication; the API key is not forwarded.
    pub fn with_transport(mut self, transport: Arc<dyn TransportSender>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Create an image request builder
    pub fn images(&self) -> ImageRequestBuilder {
        ImageRequest::builder()
    }

    /// Validate `request`, send it, and decode the generated image URLs.
    ///
    /// Validation failures return before any I/O. Transport failures, including
    /// cancellation or deadline expiry of `ctx`, come back as
    /// [`DallERequestError::Transport`]; a body that is not an image response is
    /// [`DallERequestError::Decode`].
    pub async fn generate(
        &self,
        request: &ImageRequest,
        ctx: &CallContext,
    ) -> Result<ImageResponse, DallERequestError> {
        request.validate()?;

        let body = serde_json::to_vec(request).map_err(DallERequestError::Encode)?;
        let url = self.images_url();

        debug!(
            model = %request.model,
            n = request.n,
            size = %request.size,
            url = %url,
            "sending image generation request"
        );

        let bytes = self
            .dispatch(PreparedRequest::post_json(url, body), ctx)
            .await?;

        serde_json::from_slice(&bytes).map_err(DallERequestError::Decode)
    }

    /// Generate one `1024x1024` image with `dall-e-3`
    pub async fn simple_generate(
        &self,
        prompt: impl Into<String>,
        ctx: &CallContext,
    ) -> Result<ImageResponse, DallERequestError> {
        self.generate(&ImageRequest::simple(prompt), ctx).await
    }

    fn images_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), IMAGES_ENDPOINT)
    }

    async fn dispatch(
        &self,
        request: PreparedRequest,
        ctx: &CallContext,
    ) -> Result<Bytes, TransportError> {
        match self.transport {
            Some(ref transport) => transport.send(request, ctx).await,
            None => self.http_transport().send(request, ctx).await,
        }
    }

    fn http_transport(&self) -> HttpTransport {
        let mut config = TransportConfig::new().with_bearer_auth(self.api_key.clone());
        if let Some(ref user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        HttpTransport::new(self.client.clone(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DallE::new("test-key");
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_builder() {
        let client = DallE::builder()
            .api_key("test-key")
            .base_url("https://custom.api.com/v1/")
            .user_agent("dalle-ox-test")
            .build();

        assert_eq!(client.base_url, "https://custom.api.com/v1/");
        assert_eq!(
            client.images_url(),
            "https://custom.api.com/v1/images/generations"
        );
        assert_eq!(client.user_agent.as_deref(), Some("dalle-ox-test"));
    }

    #[test]
    fn test_images_url_default() {
        assert_eq!(
            DallE::new("k").images_url(),
            "https://api.openai.com/v1/images/generations"
        );
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = DallE::new("sk-very-secret");
        assert!(!format!("{client:?}").contains("sk-very-secret"));
    }
}
