use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::TransportError;

/// Execution context carried through a single outbound call.
///
/// Holds a cancellation token and an optional deadline. Cancelling the token
/// (or any parent it was derived from) aborts the in-flight call; the future
/// doing the I/O is dropped, so a partially read body is discarded.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never cancelled and has no deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Fail the call once `deadline` passes
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Fail the call once `timeout` has elapsed from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a context that is cancelled with this one but can also be cancelled on its own
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` to completion unless the context is cancelled or its deadline elapses first.
    ///
    /// An already-cancelled context returns [`TransportError::Cancelled`] without polling `fut`.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        if self.token.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(TransportError::Cancelled),
            () = deadline => Err(TransportError::DeadlineExceeded),
            result = fut => result,
        }
    }
}
