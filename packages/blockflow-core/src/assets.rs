//! The asset boundary: loading itself is the host's job; this module only
//! models the completion signal as an explicit future with success, failure,
//! timeout, and cancellation outcomes.

use crate::error::AssetError;
use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBundle {
    pub entries: Vec<AssetEntry>,
}

/// Resolution side, held by the host. Resolves the paired ticket exactly
/// once; dropping it unresolved cancels the ticket.
pub struct AssetHandle {
    tx: oneshot::Sender<Result<AssetBundle, AssetError>>,
}

impl AssetHandle {
    pub fn complete(self, bundle: AssetBundle) {
        let _ = self.tx.send(Ok(bundle));
    }

    pub fn fail(self, reason: impl Into<String>) {
        let _ = self.tx.send(Err(AssetError::Failed(reason.into())));
    }
}

/// Waiting side. A future that yields the bundle, or an `AssetError` on
/// failure, cancellation, or an elapsed deadline.
pub struct AssetTicket {
    rx: oneshot::Receiver<Result<AssetBundle, AssetError>>,
    deadline: Option<Instant>,
    requested: Vec<String>,
    folder: String,
}

/// Starts an asset load for the named assets under `folder` and returns the
/// handle/ticket pair.
pub fn begin(requested: Vec<String>, folder: impl Into<String>) -> (AssetHandle, AssetTicket) {
    let folder = folder.into();
    tracing::info!(count = requested.len(), folder = %folder, "asset load started");
    let (tx, rx) = oneshot::channel();
    (
        AssetHandle { tx },
        AssetTicket {
            rx,
            deadline: None,
            requested,
            folder,
        },
    )
}

impl AssetTicket {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn requested(&self) -> &[String] {
        &self.requested
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    fn timed_out(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Non-blocking probe for hosts driving a frame loop instead of an
    /// executor. `Ok(None)` means still pending.
    pub fn try_take(&mut self) -> Result<Option<AssetBundle>, AssetError> {
        if self.timed_out() {
            return Err(AssetError::TimedOut);
        }
        match self.rx.try_recv() {
            Ok(Some(result)) => result.map(Some),
            Ok(None) => Ok(None),
            Err(oneshot::Canceled) => Err(AssetError::Cancelled),
        }
    }
}

impl Future for AssetTicket {
    type Output = Result<AssetBundle, AssetError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.timed_out() {
            return Poll::Ready(Err(AssetError::TimedOut));
        }
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(Err(AssetError::Cancelled)),
            Poll::Pending => {
                if this.deadline.is_some() {
                    // No timer driver here; keep the task polling until the
                    // deadline passes.
                    cx.waker().wake_by_ref();
                }
                Poll::Pending
            }
        }
    }
}
