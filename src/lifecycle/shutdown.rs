//! Graceful shutdown for the HTTP and HTTPS servers.
//!
//! A `watch` channel holds a single "stopping" flag. Servers await
//! [`Shutdown::wait`]; a trigger that happens before a server starts waiting
//! is still observed.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

use crate::lifecycle::signals::wait_for_shutdown;

/// Cloneable handle; every clone observes the same trigger.
#[derive(Debug, Clone)]
pub struct Shutdown {
    stopping: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            stopping: Arc::new(tx),
        }
    }

    /// A handle that triggers itself on SIGINT/SIGTERM.
    pub fn on_signal() -> Self {
        let shutdown = Self::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            wait_for_shutdown().await;
            trigger.trigger();
        });
        shutdown
    }

    pub fn trigger(&self) {
        self.stopping.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.stopping.borrow()
    }

    /// Resolves once shutdown has been triggered.
    pub fn wait(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.stopping.subscribe();
        async move {
            while !*rx.borrow_and_update() {
                if rx.changed().await.is_err() {
                    // Every handle dropped: nothing can trigger any more.
                    return;
                }
            }
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
