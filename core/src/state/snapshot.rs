//! Immutable per-character game state snapshots.

use serde::{Deserialize, Serialize};

use crate::game_data::{CharacterId, Class, Faction, Server, Vehicle, Zone};

/// What a character was last seen as: an infantry class or a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    Class(Class),
    Vehicle(Vehicle),
}

impl Profile {
    /// Image asset key for the underlying class or vehicle.
    pub fn asset_key(&self) -> &'static str {
        match self {
            Self::Class(class) => class.asset_key(),
            Self::Vehicle(vehicle) => vehicle.asset_key(),
        }
    }

    /// Human-readable name of the underlying class or vehicle.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Class(class) => class.display_name(),
            Self::Vehicle(vehicle) => vehicle.display_name(),
        }
    }
}

/// Point-in-time view of a tracked character.
///
/// Snapshots are only created by [`GameStateFactory::build_state`] and are
/// replaced wholesale, never mutated in place.
///
/// [`GameStateFactory::build_state`]: crate::state::GameStateFactory::build_state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub character_id: CharacterId,
    /// The character's persistent faction.
    pub faction: Faction,
    /// The faction the character currently fights for. Differs from
    /// `faction` only for the faction-less player pool.
    pub team: Faction,
    pub server: Server,
    pub profile: Profile,
    pub zone: Zone,
}
