//! Rate-limited, de-duplicating sink for presence updates.
//!
//! The broadcaster allows roughly four updates per minute, so updates are
//! never sent synchronously. `GateHandle::update` only replaces the pending
//! payload; a timer task compares it against the last broadcast one every
//! tick and transmits at most once per tick.

use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::time::sleep;

use super::payload::PresencePayload;
use super::sink::{PresenceSink, SinkError};

/// Broadcast period imposed by the rich-presence service's rate limit.
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(15);

/// Write side of the gate. Cloneable; an update is a single atomic
/// replacement of the pending payload.
#[derive(Clone)]
pub struct GateHandle {
    tx: watch::Sender<Option<PresencePayload>>,
}

impl GateHandle {
    /// Replace the pending payload. Broadcast happens on the next tick at
    /// the earliest, and only if the payload differs from the last one sent.
    pub fn update(&self, payload: PresencePayload) {
        self.tx.send_replace(Some(payload));
    }
}

/// Owns the broadcaster connection and the broadcast schedule.
pub struct PublishGate<S: PresenceSink> {
    sink: S,
    handle: GateHandle,
    pending: watch::Receiver<Option<PresencePayload>>,
    last_broadcast: Option<PresencePayload>,
    period: Duration,
}

impl<S: PresenceSink> PublishGate<S> {
    /// Perform the sink handshake and set up the gate with the standard
    /// broadcast period.
    pub async fn connect(sink: S) -> Result<Self, SinkError> {
        Self::with_period(sink, UPDATE_INTERVAL).await
    }

    /// Like [`PublishGate::connect`] but with a custom tick period, for
    /// harnesses and tests. Production wiring uses [`UPDATE_INTERVAL`].
    pub async fn with_period(mut sink: S, period: Duration) -> Result<Self, SinkError> {
        sink.connect().await?;
        tracing::info!("presence broadcaster connected");
        let (tx, pending) = watch::channel(None);
        Ok(Self {
            sink,
            handle: GateHandle { tx },
            pending,
            last_broadcast: None,
            period,
        })
    }

    pub fn handle(&self) -> GateHandle {
        self.handle.clone()
    }

    /// Drive the broadcast timer until `shutdown` fires. Returning drops
    /// the sink, and with it the broadcaster connection.
    pub async fn run(mut self, mut shutdown: oneshot::Receiver<()>) {
        loop {
            tokio::select! {
                _ = sleep(self.period) => self.tick().await,
                _ = &mut shutdown => {
                    tracing::debug!("publish gate shutting down");
                    break;
                }
            }
        }
    }

    /// One timer tick: broadcast the pending payload if it differs from the
    /// last one sent.
    async fn tick(&mut self) {
        let pending = self.pending.borrow().clone();
        let Some(payload) = pending else {
            // Nothing has been submitted yet
            return;
        };
        if self.last_broadcast.as_ref() == Some(&payload) {
            tracing::debug!("presence unchanged, skipping broadcast");
            return;
        }
        let fields = payload.present_fields();
        if fields.is_empty() {
            return;
        }

        tracing::info!("presence changed, broadcasting");
        // Recorded before the send: a failed update is not retried until
        // the payload next changes.
        self.last_broadcast = Some(payload);
        if let Err(e) = self.sink.update(fields).await {
            tracing::warn!(error = %e, "presence broadcast failed");
        }
    }
}
