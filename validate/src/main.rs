//! aurex-validate - drives the presence pipeline against a scripted feed.
//!
//! Wires an activity tracker, presence factory, and publish gate together
//! with in-process stand-ins for the external services: a static character
//! lookup, an event feed replaying a fixed scenario, and a sink that prints
//! every broadcast as one JSON line on stdout.
//!
//! Usage: aurex-validate [--character-id <id>] [--status <label>]
//!                       [--tick-ms <ms>] [--event-gap-ms <ms>]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clap::Parser;
use tokio::sync::{mpsc, oneshot};
use tokio::time::sleep;
use tracing_subscriber::filter::EnvFilter;

use aurex_core::context::AppConfig;
use aurex_core::events::{
    ChannelSubscription, DeathEvent, EventFeed, EventSubscription, ExperienceEvent, FeedError,
    GameEvent, SubscriptionFilter,
};
use aurex_core::game_data::CharacterId;
use aurex_core::presence::{PresenceFactory, PresenceFields, PresenceSink, PublishGate, SinkError};
use aurex_core::tracking::{
    CharacterInfo, CharacterLookup, LookupError, TrackerEvent, TrackerHandle, spawn_tracker,
};
use aurex_types::UserStatus;

#[derive(Parser)]
#[command(version, about = "Replay a scripted event feed through the presence pipeline")]
struct Cli {
    /// Character id to track
    #[arg(long, default_value_t = 5428072203494645969)]
    character_id: u64,

    /// Status label for the "state" field, e.g. "Playing Solo"
    #[arg(long)]
    status: Option<String>,

    /// Publish gate tick period in milliseconds (the live gate uses 15000)
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Gap between scripted events in milliseconds
    #[arg(long, default_value_t = 400)]
    event_gap_ms: u64,
}

/// Initialize logging to stderr, honoring `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Lookup answering every query with the same roster entry.
struct StaticLookup {
    info: CharacterInfo,
    world_id: u32,
}

#[async_trait]
impl CharacterLookup for StaticLookup {
    async fn character_info(
        &self,
        _character_id: CharacterId,
    ) -> Result<CharacterInfo, LookupError> {
        Ok(self.info)
    }

    async fn character_world(&self, _character_id: CharacterId) -> Result<u32, LookupError> {
        Ok(self.world_id)
    }
}

/// Feed replaying a fixed list of events with a delay between them.
struct ScriptedFeed {
    events: Vec<GameEvent>,
    gap: Duration,
}

#[async_trait]
impl EventFeed for ScriptedFeed {
    async fn subscribe(
        &self,
        filter: SubscriptionFilter,
    ) -> Result<Box<dyn EventSubscription>, FeedError> {
        let (tx, rx) = mpsc::channel(16);
        let matching: Vec<GameEvent> = self
            .events
            .iter()
            .copied()
            .filter(|event| filter.matches(event))
            .collect();
        let gap = self.gap;
        tokio::spawn(async move {
            for event in matching {
                sleep(gap).await;
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            // Dropping the sender ends the subscription
        });
        Ok(Box::new(ChannelSubscription::new(rx)))
    }
}

/// Sink printing each broadcast as a JSON line.
struct LoggingSink;

#[async_trait]
impl PresenceSink for LoggingSink {
    async fn connect(&mut self) -> Result<(), SinkError> {
        tracing::info!("logging sink ready");
        Ok(())
    }

    async fn update(&mut self, fields: PresenceFields) -> Result<(), SinkError> {
        let line = serde_json::to_string(&serde_json::Value::Object(fields))
            .map_err(|e| SinkError::Update(e.to_string()))?;
        println!("{line}");
        Ok(())
    }
}

/// A short session: infantry fights, a failed vehicle lookup, an ANT trip,
/// and an experience tick that must not dismount the vehicle.
fn scripted_events(character_id: CharacterId) -> Vec<GameEvent> {
    let kill = |loadout_id, zone_id, vehicle_id| {
        GameEvent::Death(DeathEvent {
            character_id: 1,
            attacker_character_id: character_id,
            character_loadout_id: 15,
            attacker_loadout_id: loadout_id,
            zone_id,
            attacker_vehicle_id: vehicle_id,
            team_id: None,
            attacker_team_id: None,
        })
    };
    vec![
        // Heavy Assault kill on Hossin
        kill(6, 4, None),
        // Unknown vehicle id: the class-derived profile must survive
        kill(6, 4, Some(9000)),
        // Roadkill in an ANT on Indar
        kill(5, 2, Some(15)),
        // Experience tick on Esamir; still in the ANT
        GameEvent::Experience(ExperienceEvent {
            character_id,
            loadout_id: 4,
            zone_id: 8,
        }),
        // Killed as a Combat Medic on Esamir
        GameEvent::Death(DeathEvent {
            character_id,
            attacker_character_id: 2,
            character_loadout_id: 4,
            attacker_loadout_id: 20,
            zone_id: 8,
            attacker_vehicle_id: None,
            team_id: None,
            attacker_team_id: None,
        }),
    ]
}

async fn wait_for_initial_state(
    tracker: &TrackerHandle,
) -> Result<aurex_core::GameState, Box<dyn std::error::Error>> {
    for _ in 0..200 {
        if let Some(state) = tracker.current_state() {
            return Ok(state);
        }
        sleep(Duration::from_millis(10)).await;
    }
    Err("tracker failed to initialize".into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();
    let config = AppConfig::load();

    let status = match cli.status.as_deref() {
        Some(label) => UserStatus::from_label(label)
            .ok_or_else(|| format!("unknown status label: {label}"))?,
        None => config.status,
    };

    let lookup = Arc::new(StaticLookup {
        info: CharacterInfo {
            profile_id: 6, // NC Engineer
            faction_id: 2, // NC
        },
        world_id: 17, // Emerald
    });
    let feed = Arc::new(ScriptedFeed {
        events: scripted_events(cli.character_id),
        gap: Duration::from_millis(cli.event_gap_ms),
    });

    let mut tracker = spawn_tracker(cli.character_id, lookup, feed, config.default_server)?;

    let tick = Duration::from_millis(cli.tick_ms);
    let gate = PublishGate::with_period(LoggingSink, tick).await?;
    let gate_handle = gate.handle();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let gate_task = tokio::spawn(gate.run(shutdown_rx));

    // First payload as soon as the tracker is live
    let initial = wait_for_initial_state(&tracker).await?;
    let mut presence = PresenceFactory::new(initial, status, config.visibility);
    gate_handle.update(presence.build_presence());

    while let Some(event) = tracker.next_event().await {
        match event {
            TrackerEvent::StateChanged => {
                if let Some(state) = tracker.current_state() {
                    presence.update_game_state(state);
                    gate_handle.update(presence.build_presence());
                }
            }
            TrackerEvent::TrackingStopped => {
                tracing::info!("event feed ended");
                break;
            }
        }
    }

    // Give the gate a final tick to flush the last payload
    sleep(tick * 2).await;
    let _ = shutdown_tx.send(());
    gate_task.await?;
    Ok(())
}
