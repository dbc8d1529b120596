//! OpenAI image generation client for Rust
//!
//! This crate wraps the `POST /images/generations` endpoint:
//! - Typed requests for the `dall-e-2` and `dall-e-3` models
//! - Local validation (non-empty prompt, allow-listed model) before any I/O
//! - Caller-controlled cancellation and deadlines through [`CallContext`]
//! - Pluggable transport via [`TransportSender`]
//!
//! # Example
//!
//! ```rust,no_run
//! use dalle_ox::{CallContext, DallE};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DallE::from_env()?;
//!
//!     let request = client
//!         .images()
//!         .model("dall-e-2")
//!         .prompt("A watercolor lighthouse at dusk")
//!         .n(2)
//!         .size("512x512")
//!         .build();
//!
//!     let response = client.generate(&request, &CallContext::new()).await?;
//!     for url in response.urls() {
//!         println!("{url}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod request;
pub mod response;

// Re-export main types
pub use client::{DEFAULT_BASE_URL, DallE};
pub use error::DallERequestError;
pub use model::{ALLOWED_MODELS, ImageModel, ImageSize};
pub use request::ImageRequest;
pub use response::{ImageData, ImageResponse};

// Re-export transport types callers need to drive a request
pub use ox_transport::{CallContext, CancellationToken, TransportError, TransportSender};
