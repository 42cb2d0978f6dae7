//! Background task plumbing between the tokio runtime and the UI thread.
//!
//! A spawned future reports back through a one-shot channel that the UI
//! polls once per frame. Tasks stop early when the shutdown token fires, and
//! a dropped `Pending` turns the late send into a no-op.

use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// Result of polling a background task
#[derive(Debug, PartialEq, Eq)]
pub enum TaskPoll<T> {
    Ready(T),
    Running,
    /// Task ended without a result (shutdown or panic)
    Abandoned,
}

/// Receiving end of a background task
pub struct Pending<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Pending<T> {
    pub fn poll(&mut self) -> TaskPoll<T> {
        match self.rx.try_recv() {
            Ok(value) => TaskPoll::Ready(value),
            Err(oneshot::error::TryRecvError::Empty) => TaskPoll::Running,
            Err(oneshot::error::TryRecvError::Closed) => TaskPoll::Abandoned,
        }
    }

    #[cfg(test)]
    pub async fn wait(self) -> Option<T> {
        self.rx.await.ok()
    }
}

/// Spawns UI-bound work on the runtime. `notify` runs after each delivered
/// result; the app passes a repaint request.
#[derive(Clone)]
pub struct Spawner {
    handle: Handle,
    shutdown: CancellationToken,
    notify: Arc<dyn Fn() + Send + Sync>,
}

impl Spawner {
    pub fn new(handle: Handle, notify: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            handle,
            shutdown: CancellationToken::new(),
            notify: Arc::new(notify),
        }
    }

    pub fn spawn<F, T>(&self, fut: F) -> Pending<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let shutdown = self.shutdown.clone();
        let notify = self.notify.clone();
        self.handle.spawn(async move {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {}
                value = fut => {
                    if tx.send(value).is_ok() {
                        notify();
                    }
                }
            }
        });
        Pending { rx }
    }

    /// Stop every task spawned through this spawner (and its clones)
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    #[cfg(test)]
    pub fn current() -> Self {
        Self::new(Handle::current(), || {})
    }
}
