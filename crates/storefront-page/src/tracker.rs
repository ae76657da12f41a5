//! Visitor tracking seam.
//!
//! Recommendations need a visitor id, which only exists once the tracking
//! system has loaded. Waiting for it is a plain suspension point: there is no
//! timeout, so a tracker that never loads means recommendations are never
//! fetched.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

pub trait VisitorTracker: Send + Sync {
    /// Resolves once the tracker knows the visitor. May never resolve.
    fn wait_until_loaded(&self) -> impl Future<Output = ()> + Send;

    /// The visitor id, once loaded.
    fn visitor_id(&self) -> Option<String>;
}

/// Tracker backed by a `watch` channel; cloning shares the same state.
#[derive(Debug, Clone)]
pub struct ChannelTracker {
    state: Arc<watch::Sender<Option<String>>>,
}

impl Default for ChannelTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelTracker {
    /// A tracker that has not loaded yet.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            state: Arc::new(tx),
        }
    }

    /// A tracker that already knows the visitor.
    #[must_use]
    pub fn loaded(visitor_id: impl Into<String>) -> Self {
        let tracker = Self::new();
        tracker.mark_loaded(visitor_id);
        tracker
    }

    pub fn mark_loaded(&self, visitor_id: impl Into<String>) {
        self.state.send_replace(Some(visitor_id.into()));
    }
}

impl VisitorTracker for ChannelTracker {
    fn wait_until_loaded(&self) -> impl Future<Output = ()> + Send {
        let mut rx = self.state.subscribe();
        async move {
            let loaded = rx.wait_for(Option::is_some).await.is_ok();
            if !loaded {
                // Sender gone without a visitor: the tracker will never load.
                std::future::pending::<()>().await;
            }
        }
    }

    fn visitor_id(&self) -> Option<String> {
        self.state.borrow().clone()
    }
}
