pub mod factory;
pub mod gate;
pub mod payload;
pub mod sink;

pub use factory::PresenceFactory;
pub use gate::{GateHandle, PublishGate, UPDATE_INTERVAL};
pub use payload::PresencePayload;
pub use sink::{PresenceFields, PresenceSink, SinkError};
