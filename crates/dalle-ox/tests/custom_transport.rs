use std::sync::{Arc, Mutex};

use dalle_ox::{
    CallContext, DallE, DallERequestError, ImageRequest, TransportError, TransportSender,
};
use ox_transport::{Bytes, PreparedRequest, async_trait};

/// Records every request and answers with a canned body
struct CannedTransport {
    body: &'static str,
    seen: Mutex<Vec<PreparedRequest>>,
}

impl CannedTransport {
    fn new(body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            body,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<PreparedRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransportSender for CannedTransport {
    async fn send(
        &self,
        request: PreparedRequest,
        ctx: &CallContext,
    ) -> Result<Bytes, TransportError> {
        self.seen.lock().unwrap().push(request);
        ctx.run(async { Ok(Bytes::from_static(self.body.as_bytes())) })
            .await
    }
}

fn client(transport: Arc<CannedTransport>) -> DallE {
    DallE::builder()
        .api_key("unused")
        .base_url("https://images.example.com/v1/")
        .build()
        .with_transport(transport)
}

#[tokio::test]
async fn test_prepared_request_shape() {
    let transport = CannedTransport::new(r#"{"data":[{"url":"http://x/1"}]}"#);
    let client = client(transport.clone());

    client
        .simple_generate("a cat", &CallContext::new())
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, reqwest::Method::POST);
    assert_eq!(
        requests[0].url,
        "https://images.example.com/v1/images/generations"
    );

    let body: serde_json::Value =
        serde_json::from_slice(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"model": "dall-e-3", "prompt": "a cat", "n": 1, "size": "1024x1024"})
    );
}

#[tokio::test]
async fn test_decode_preserves_order() {
    let transport = CannedTransport::new(r#"{"data":[{"url":"http://x/1"},{"url":"http://x/2"}]}"#);
    let response = client(transport)
        .simple_generate("a cat", &CallContext::new())
        .await
        .unwrap();

    let urls: Vec<&str> = response.urls().collect();
    assert_eq!(urls, ["http://x/1", "http://x/2"]);
}

#[tokio::test]
async fn test_empty_data_is_ok() {
    let transport = CannedTransport::new(r#"{"data":[]}"#);
    let response = client(transport)
        .simple_generate("a cat", &CallContext::new())
        .await
        .unwrap();
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_non_json_is_decode_error() {
    let transport = CannedTransport::new("definitely not json");
    let result = client(transport)
        .simple_generate("a cat", &CallContext::new())
        .await;
    assert!(matches!(result, Err(DallERequestError::Decode(_))));
}

#[tokio::test]
async fn test_invalid_requests_never_reach_transport() {
    let transport = CannedTransport::new(r#"{"data":[]}"#);
    let client = client(transport.clone());

    let empty_and_unsupported = ImageRequest::builder().model("dall-e-1").prompt("").build();
    let err = client
        .generate(&empty_and_unsupported, &CallContext::new())
        .await
        .unwrap_err();
    assert!(matches!(err, DallERequestError::EmptyPrompt));

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_cancelled_context_surfaces_transport_error() {
    let transport = CannedTransport::new(r#"{"data":[]}"#);
    let ctx = CallContext::new();
    ctx.cancel();

    let err = client(transport)
        .simple_generate("a cat", &ctx)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DallERequestError::Transport(TransportError::Cancelled)
    ));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let transport = CannedTransport::new(r#"{"data":[{"url":"http://x/1"}]}"#);
    let client = client(transport.clone());

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .simple_generate(format!("cat #{i}"), &CallContext::new())
                .await
        }));
    }

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.first_url(), Some("http://x/1"));
    }
    assert_eq!(transport.requests().len(), 8);
}
