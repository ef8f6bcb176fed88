//! Activity state machine for a single tracked character.
//!
//! The machine owns its `GameStateFactory` exclusively; the async feed
//! integration hands each event to one mutating method here rather than
//! closing over shared state. Lifecycle:
//! - Uninitialized: created, nothing looked up yet
//! - Initializing: waiting on the character/world lookups
//! - Active: subscribed, reacting to events
//! - Stopped: terminal, by request or after a failed lookup

use crate::events::{DeathEvent, ExperienceEvent};
use crate::game_data::{Class, Faction, Server, Vehicle, Zone};
use crate::state::{GameState, GameStateFactory, Profile};

use super::lookup::CharacterInfo;
use crate::game_data::CharacterId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityState {
    #[default]
    Uninitialized,
    Initializing,
    Active,
    Stopped,
}

/// Tracks one character's activity from the event feed.
#[derive(Debug)]
pub struct ActivityTracker {
    character_id: CharacterId,
    state: ActivityState,
    factory: Option<GameStateFactory>,
}

impl ActivityTracker {
    pub fn new(character_id: CharacterId) -> Self {
        Self {
            character_id,
            state: ActivityState::default(),
            factory: None,
        }
    }

    pub fn character_id(&self) -> CharacterId {
        self.character_id
    }

    pub fn state(&self) -> ActivityState {
        self.state
    }

    /// Latest snapshot, or `None` before the tracker has been initialized.
    pub fn current_state(&self) -> Option<GameState> {
        if self.state != ActivityState::Active {
            return None;
        }
        self.factory.as_ref().map(GameStateFactory::build_state)
    }

    pub fn begin_initializing(&mut self) {
        if self.state == ActivityState::Uninitialized {
            self.state = ActivityState::Initializing;
        }
    }

    /// Complete initialization from the lookup results and go Active.
    pub fn activate(&mut self, info: CharacterInfo, server: Server) {
        let faction = Faction::from_faction_id(info.faction_id);
        let initial_class = Class::from_profile_id(info.profile_id);
        self.factory = Some(GameStateFactory::new(
            self.character_id,
            faction,
            server,
            Some(initial_class),
        ));
        self.state = ActivityState::Active;
        tracing::info!(
            character_id = self.character_id,
            faction = faction.tag(),
            server = server.display_name(),
            "activity tracking started"
        );
    }

    /// Terminal transition; the machine accepts no further events.
    pub fn stop(&mut self) {
        if self.state != ActivityState::Stopped {
            tracing::info!(character_id = self.character_id, "activity tracking stopped");
            self.state = ActivityState::Stopped;
        }
    }

    /// Apply a death event. Returns whether the snapshot was updated and a
    /// state-changed notification is due.
    pub fn handle_death(&mut self, evt: &DeathEvent) -> bool {
        if self.state != ActivityState::Active {
            return false;
        }
        let Some(factory) = self.factory.as_mut() else {
            return false;
        };
        let is_source = evt.attacker_character_id == self.character_id;

        // The zone id is present on every death event
        factory.set_zone(Zone::from_zone_id(evt.zone_id));

        // Class comes from whichever loadout belongs to the tracked side
        let loadout_id = if is_source {
            evt.attacker_loadout_id
        } else {
            evt.character_loadout_id
        };
        let mut profile = Profile::Class(Class::from_loadout_id(loadout_id));

        // An explicit vehicle is more specific than the inferred class
        if is_source
            && let Some(vehicle_id) = evt.attacker_vehicle_id
            && vehicle_id != 0
        {
            match Vehicle::from_vehicle_id(vehicle_id) {
                Ok(vehicle) => profile = Profile::Vehicle(vehicle),
                Err(e) => {
                    tracing::debug!(error = %e, "keeping class-derived profile");
                }
            }
        }
        factory.set_profile(profile);

        // Team ids are optional; 0 means "no team" and leaves it untouched
        let team_id = if is_source {
            evt.attacker_team_id
        } else {
            evt.team_id
        };
        if let Some(team_id) = team_id
            && team_id != 0
        {
            factory.set_team(Faction::from_faction_id(team_id));
        }

        true
    }

    /// Apply an experience tick. Returns whether the snapshot was updated.
    pub fn handle_experience(&mut self, evt: &ExperienceEvent) -> bool {
        if self.state != ActivityState::Active {
            return false;
        }
        if evt.character_id != self.character_id {
            // Experience gained by someone else tells us nothing
            return false;
        }
        let Some(factory) = self.factory.as_mut() else {
            return false;
        };

        factory.set_zone(Zone::from_zone_id(evt.zone_id));

        // An experience tick cannot tell whether the player left their
        // vehicle, so only a class profile is refreshed from it.
        if let Profile::Class(_) = factory.profile() {
            factory.set_profile(Profile::Class(Class::from_loadout_id(evt.loadout_id)));
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACKED: CharacterId = 5428072203494645969;
    const OTHER: CharacterId = 5428072203494000000;

    fn active_tracker() -> ActivityTracker {
        let mut tracker = ActivityTracker::new(TRACKED);
        tracker.begin_initializing();
        tracker.activate(
            CharacterInfo {
                profile_id: 6, // NC Engineer
                faction_id: 2, // NC
            },
            Server::Emerald,
        );
        tracker
    }

    fn death(attacker: CharacterId, victim: CharacterId) -> DeathEvent {
        DeathEvent {
            character_id: victim,
            attacker_character_id: attacker,
            character_loadout_id: 15, // VS Infiltrator
            attacker_loadout_id: 6,   // NC Heavy Assault
            zone_id: 4,               // Hossin
            attacker_vehicle_id: None,
            team_id: None,
            attacker_team_id: None,
        }
    }

    #[test]
    fn test_no_state_before_activation() {
        let mut tracker = ActivityTracker::new(TRACKED);
        assert_eq!(tracker.state(), ActivityState::Uninitialized);
        assert!(tracker.current_state().is_none());

        tracker.begin_initializing();
        assert_eq!(tracker.state(), ActivityState::Initializing);
        assert!(tracker.current_state().is_none());

        // Events before Active are ignored
        assert!(!tracker.handle_death(&death(TRACKED, OTHER)));
    }

    #[test]
    fn test_activation_builds_initial_snapshot() {
        let tracker = active_tracker();
        let state = tracker.current_state().unwrap();
        assert_eq!(state.faction, Faction::Nc);
        assert_eq!(state.team, Faction::Nc);
        assert_eq!(state.server, Server::Emerald);
        assert_eq!(state.profile, Profile::Class(Class::Engineer));
        assert_eq!(state.zone, Zone::Sanctuary);
    }

    #[test]
    fn test_death_as_attacker_uses_attacker_loadout() {
        let mut tracker = active_tracker();
        assert!(tracker.handle_death(&death(TRACKED, OTHER)));

        let state = tracker.current_state().unwrap();
        assert_eq!(state.profile, Profile::Class(Class::HeavyAssault));
        assert_eq!(state.zone, Zone::Hossin);
    }

    #[test]
    fn test_death_as_victim_uses_own_loadout() {
        let mut tracker = active_tracker();
        assert!(tracker.handle_death(&death(OTHER, TRACKED)));

        let state = tracker.current_state().unwrap();
        // character_loadout_id is the victim's loadout
        assert_eq!(state.profile, Profile::Class(Class::Infiltrator));
    }

    #[test]
    fn test_known_vehicle_overrides_class() {
        let mut tracker = active_tracker();
        let mut evt = death(TRACKED, OTHER);
        evt.attacker_vehicle_id = Some(15); // ANT
        assert!(tracker.handle_death(&evt));

        let state = tracker.current_state().unwrap();
        assert_eq!(state.profile, Profile::Vehicle(Vehicle::Ant));
    }

    #[test]
    fn test_unknown_vehicle_keeps_class_profile() {
        let mut tracker = active_tracker();
        let mut evt = death(TRACKED, OTHER);
        evt.attacker_vehicle_id = Some(9000);
        assert!(tracker.handle_death(&evt));

        let state = tracker.current_state().unwrap();
        assert_eq!(state.profile, Profile::Class(Class::HeavyAssault));
        assert_eq!(state.zone, Zone::Hossin);
    }

    #[test]
    fn test_victim_side_ignores_attacker_vehicle() {
        let mut tracker = active_tracker();
        let mut evt = death(OTHER, TRACKED);
        evt.attacker_vehicle_id = Some(11); // attacker's Galaxy, not ours
        assert!(tracker.handle_death(&evt));

        let state = tracker.current_state().unwrap();
        assert_eq!(state.profile, Profile::Class(Class::Infiltrator));
    }

    #[test]
    fn test_team_updates_from_optional_field() {
        let mut tracker = active_tracker();

        let mut evt = death(TRACKED, OTHER);
        evt.attacker_team_id = Some(1); // fighting for VS
        tracker.handle_death(&evt);
        assert_eq!(tracker.current_state().unwrap().team, Faction::Vs);

        // Zero means "no team" and must not clobber the current value
        let mut evt = death(TRACKED, OTHER);
        evt.attacker_team_id = Some(0);
        tracker.handle_death(&evt);
        assert_eq!(tracker.current_state().unwrap().team, Faction::Vs);

        // Absent field leaves the team alone too
        tracker.handle_death(&death(TRACKED, OTHER));
        assert_eq!(tracker.current_state().unwrap().team, Faction::Vs);
    }

    #[test]
    fn test_zone_is_last_write_wins() {
        let mut tracker = active_tracker();
        for zone_id in [2, 8, 4] {
            let mut evt = death(TRACKED, OTHER);
            evt.zone_id = zone_id;
            tracker.handle_death(&evt);
        }
        assert_eq!(tracker.current_state().unwrap().zone, Zone::Hossin);
    }

    #[test]
    fn test_experience_updates_class_and_zone() {
        let mut tracker = active_tracker();
        let evt = ExperienceEvent {
            character_id: TRACKED,
            loadout_id: 4, // NC Combat Medic
            zone_id: 6,    // Amerish
        };
        assert!(tracker.handle_experience(&evt));

        let state = tracker.current_state().unwrap();
        assert_eq!(state.profile, Profile::Class(Class::CombatMedic));
        assert_eq!(state.zone, Zone::Amerish);
    }

    #[test]
    fn test_experience_does_not_dismount_vehicle() {
        let mut tracker = active_tracker();
        let mut evt = death(TRACKED, OTHER);
        evt.attacker_vehicle_id = Some(12); // Harasser
        tracker.handle_death(&evt);

        assert!(tracker.handle_experience(&ExperienceEvent {
            character_id: TRACKED,
            loadout_id: 6,
            zone_id: 2,
        }));

        let state = tracker.current_state().unwrap();
        // Still in the Harasser, but the zone moved
        assert_eq!(state.profile, Profile::Vehicle(Vehicle::Harasser));
        assert_eq!(state.zone, Zone::Indar);
    }

    #[test]
    fn test_experience_for_other_character_is_ignored() {
        let mut tracker = active_tracker();
        assert!(!tracker.handle_experience(&ExperienceEvent {
            character_id: OTHER,
            loadout_id: 6,
            zone_id: 2,
        }));
        assert_eq!(tracker.current_state().unwrap().zone, Zone::Sanctuary);
    }

    #[test]
    fn test_stopped_tracker_ignores_events() {
        let mut tracker = active_tracker();
        tracker.stop();
        assert_eq!(tracker.state(), ActivityState::Stopped);
        assert!(!tracker.handle_death(&death(TRACKED, OTHER)));
        assert!(tracker.current_state().is_none());
    }
}
