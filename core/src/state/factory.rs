//! Incremental construction of [`GameState`] snapshots.

use crate::game_data::{CharacterId, Class, Faction, Server, Zone};

use super::snapshot::{GameState, Profile};

/// Builds [`GameState`] values from incremental updates.
///
/// The factory owns the identity fields that cannot be inferred from event
/// payloads (character id, faction, server) and keeps the latest value of
/// every field that changes per event. Not every event carries all fields,
/// so fields that were never updated keep their last known or default value.
#[derive(Debug, Clone)]
pub struct GameStateFactory {
    character_id: CharacterId,
    faction: Faction,
    team: Faction,
    server: Server,
    profile: Profile,
    zone: Zone,
}

impl GameStateFactory {
    /// Fix the identity fields for one tracked character. The team starts
    /// equal to the faction, the zone at its default, and the profile at the
    /// given initial class or Light Assault.
    pub fn new(
        character_id: CharacterId,
        faction: Faction,
        server: Server,
        initial_class: Option<Class>,
    ) -> Self {
        Self {
            character_id,
            faction,
            team: faction,
            server,
            profile: Profile::Class(initial_class.unwrap_or(Class::LightAssault)),
            zone: Zone::default(),
        }
    }

    pub fn character_id(&self) -> CharacterId {
        self.character_id
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    pub fn set_team(&mut self, team: Faction) {
        self.team = team;
    }

    pub fn set_zone(&mut self, zone: Zone) {
        self.zone = zone;
    }

    /// Project the current fields into an immutable snapshot. Side-effect
    /// free; every call reflects all updates applied so far.
    pub fn build_state(&self) -> GameState {
        GameState {
            character_id: self.character_id,
            faction: self.faction,
            team: self.team,
            server: self.server,
            profile: self.profile,
            zone: self.zone,
        }
    }
}
