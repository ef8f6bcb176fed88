//! Seam to the external event feed client.
//!
//! The real feed client (WebSocket, wire protocol, reconnects) lives outside
//! this crate; it only needs to deliver matching events through these traits.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::event::{GameEvent, SubscriptionFilter};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("event feed connection failed: {0}")]
    Connection(String),
    #[error("event feed rejected subscription: {0}")]
    Rejected(String),
}

/// A connected event feed that can hand out filtered subscriptions.
#[async_trait]
pub trait EventFeed: Send + Sync {
    async fn subscribe(
        &self,
        filter: SubscriptionFilter,
    ) -> Result<Box<dyn EventSubscription>, FeedError>;
}

/// One live subscription. Implementations must stop delivering events once
/// `close` returns.
#[async_trait]
pub trait EventSubscription: Send {
    /// The next matching event, or `None` once the feed has ended the
    /// subscription on its own.
    async fn next_event(&mut self) -> Option<GameEvent>;

    /// Tear the subscription down. No events are delivered after this
    /// returns.
    async fn close(&mut self);
}

/// Channel-backed subscription, for in-process feeds (tests, replay
/// harnesses). The feed side keeps the [`mpsc::Sender`].
pub struct ChannelSubscription {
    rx: mpsc::Receiver<GameEvent>,
}

impl ChannelSubscription {
    pub fn new(rx: mpsc::Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

#[async_trait]
impl EventSubscription for ChannelSubscription {
    async fn next_event(&mut self) -> Option<GameEvent> {
        self.rx.recv().await
    }

    async fn close(&mut self) {
        self.rx.close();
    }
}
