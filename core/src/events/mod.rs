pub mod event;
pub mod feed;

pub use event::{DeathEvent, EventKind, ExperienceEvent, GameEvent, SubscriptionFilter};
pub use feed::{ChannelSubscription, EventFeed, EventSubscription, FeedError};
