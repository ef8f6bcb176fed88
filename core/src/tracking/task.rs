//! Async shell around [`ActivityTracker`].
//!
//! The tracker task performs the one-time lookups, holds the event feed
//! subscription, and drives the state machine. Consumers receive
//! payload-free notifications and re-read the latest snapshot through the
//! handle's watch channel.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::events::{EventFeed, FeedError, GameEvent, SubscriptionFilter};
use crate::game_data::{CharacterId, Server};
use crate::state::GameState;

use super::activity::ActivityTracker;
use super::lookup::CharacterLookup;

/// Notifications emitted by a tracker task. Deliberately payload-free;
/// consumers read the snapshot via [`TrackerHandle::current_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    StateChanged,
    TrackingStopped,
}

#[derive(Debug, Error)]
pub enum TrackerError {
    /// No async runtime was available to host the tracker task.
    #[error("no tokio runtime available for the tracker task")]
    NoRuntime,
    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// Handle to a running tracker task.
pub struct TrackerHandle {
    events: mpsc::UnboundedReceiver<TrackerEvent>,
    state: watch::Receiver<Option<GameState>>,
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

impl TrackerHandle {
    /// Next notification; `None` once the task has ended.
    pub async fn next_event(&mut self) -> Option<TrackerEvent> {
        self.events.recv().await
    }

    /// Latest snapshot, or `None` before initialization completed.
    pub fn current_state(&self) -> Option<GameState> {
        *self.state.borrow()
    }

    /// Stop tracking. The event feed subscription is torn down before this
    /// returns and no notifications are emitted afterwards.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.join.await;
    }
}

/// Spawn the tracker task for one character.
///
/// Fails synchronously when called outside a tokio runtime. Lookup failures
/// during initialization do not fail the spawn; they surface as a single
/// [`TrackerEvent::TrackingStopped`] notification.
pub fn spawn_tracker(
    character_id: CharacterId,
    lookup: Arc<dyn CharacterLookup>,
    feed: Arc<dyn EventFeed>,
    default_server: Server,
) -> Result<TrackerHandle, TrackerError> {
    let runtime = tokio::runtime::Handle::try_current().map_err(|_| TrackerError::NoRuntime)?;

    let (event_tx, events) = mpsc::unbounded_channel();
    let (state_tx, state) = watch::channel(None);
    let (stop_tx, stop_rx) = oneshot::channel();

    let tracker = ActivityTracker::new(character_id);
    let join = runtime.spawn(run_tracker(
        tracker,
        lookup,
        feed,
        default_server,
        event_tx,
        state_tx,
        stop_rx,
    ));

    Ok(TrackerHandle {
        events,
        state,
        stop_tx,
        join,
    })
}

async fn run_tracker(
    mut tracker: ActivityTracker,
    lookup: Arc<dyn CharacterLookup>,
    feed: Arc<dyn EventFeed>,
    default_server: Server,
    event_tx: mpsc::UnboundedSender<TrackerEvent>,
    state_tx: watch::Sender<Option<GameState>>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let character_id = tracker.character_id();
    tracker.begin_initializing();

    let info = match lookup.character_info(character_id).await {
        Ok(info) => info,
        Err(e) => {
            tracing::warn!(error = %e, "tracker initialization failed");
            tracker.stop();
            let _ = event_tx.send(TrackerEvent::TrackingStopped);
            return;
        }
    };
    let server = match lookup.character_world(character_id).await {
        Ok(world_id) => Server::from_world_id(world_id, default_server),
        Err(e) => {
            tracing::warn!(error = %e, "tracker initialization failed");
            tracker.stop();
            let _ = event_tx.send(TrackerEvent::TrackingStopped);
            return;
        }
    };

    tracker.activate(info, server);
    state_tx.send_replace(tracker.current_state());

    let mut subscription = match feed
        .subscribe(SubscriptionFilter::for_character(character_id))
        .await
    {
        Ok(subscription) => subscription,
        Err(e) => {
            tracing::warn!(error = %e, "event feed subscription failed");
            tracker.stop();
            let _ = event_tx.send(TrackerEvent::TrackingStopped);
            return;
        }
    };

    // Stopped explicitly via the handle, or by the feed ending the
    // subscription (e.g. the character logged off).
    let stopped_by_request = loop {
        tokio::select! {
            _ = &mut stop_rx => break true,
            maybe_event = subscription.next_event() => {
                let Some(event) = maybe_event else { break false };
                let updated = match &event {
                    GameEvent::Death(evt) => tracker.handle_death(evt),
                    GameEvent::Experience(evt) => tracker.handle_experience(evt),
                };
                if updated {
                    state_tx.send_replace(tracker.current_state());
                    let _ = event_tx.send(TrackerEvent::StateChanged);
                }
            }
        }
    };

    subscription.close().await;
    tracker.stop();
    if !stopped_by_request {
        let _ = event_tx.send(TrackerEvent::TrackingStopped);
    }
}
