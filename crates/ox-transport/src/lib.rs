#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::pedantic, clippy::unwrap_used)]

//! Shared HTTP transport for the dalle-ox client
//!
//! Provider crates prepare a fully-addressed request and hand it to a
//! [`TransportSender`]. The transport owns authentication, headers and
//! status handling; a [`CallContext`] carries cancellation and deadlines
//! through the exchange.

pub mod context;
pub mod error;
pub mod http;
pub mod transport;

pub use context::CallContext;
pub use error::TransportError;
pub use http::{HttpTransport, TransportConfig};
pub use transport::{PreparedRequest, TransportSender};

/// Re-export common types for convenience
pub use async_trait::async_trait;
pub use bytes::Bytes;
pub use tokio_util::sync::CancellationToken;
