pub mod context;
pub mod events;
pub mod game_data;
pub mod presence;
pub mod state;
pub mod tracking;

// Re-exports for convenience
pub use events::{GameEvent, SubscriptionFilter};
pub use game_data::*;
pub use presence::{PresenceFactory, PresencePayload, PublishGate};
pub use state::{GameState, GameStateFactory, Profile};
pub use tracking::{ActivityTracker, TrackerEvent, TrackerHandle};
