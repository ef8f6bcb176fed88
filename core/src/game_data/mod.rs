//! Game-specific vocabulary and id conversion tables.
//!
//! This module contains everything that could break with major game
//! updates, with a bonus sprinkle of hard-coded ID values. Conversions are
//! total with a documented fallback, except the vehicle lookup, which fails
//! for unrecognized codes so callers can keep their previous profile.

mod class;
mod faction;
mod ids;
mod server;
mod vehicle;
mod zone;

pub use class::Class;
pub use faction::Faction;
pub use ids::{
    CharacterId, FactionId, LoadoutId, ProfileId, VehicleId, WorldId, ZoneId,
};
pub use server::Server;
pub use vehicle::{UnknownVehicle, Vehicle};
pub use zone::Zone;
