//! Combines the game state and the user-chosen status into presence
//! payloads.

use aurex_types::{UserStatus, VisibilityConfig};

use crate::state::{GameState, Profile};

use super::payload::PresencePayload;

/// Mutable factory holding the latest game and user state.
///
/// `build_presence` recomputes the payload on demand; no history is kept
/// beyond the single latest value of each input.
#[derive(Debug, Clone)]
pub struct PresenceFactory {
    game_state: GameState,
    user_status: UserStatus,
    visibility: VisibilityConfig,
}

impl PresenceFactory {
    pub fn new(
        game_state: GameState,
        user_status: UserStatus,
        visibility: VisibilityConfig,
    ) -> Self {
        Self {
            game_state,
            user_status,
            visibility,
        }
    }

    /// Called in response to the user changing their status.
    pub fn update_user_status(&mut self, user_status: UserStatus) {
        self.user_status = user_status;
    }

    /// Called regularly in response to in-game events.
    pub fn update_game_state(&mut self, game_state: GameState) {
        self.game_state = game_state;
    }

    pub fn update_visibility(&mut self, visibility: VisibilityConfig) {
        self.visibility = visibility;
    }

    /// Build a presence payload from the current inputs.
    pub fn build_presence(&self) -> PresencePayload {
        let (large_image, large_text) = self.zone_assets();
        let (small_image, small_text) = self.profile_assets();
        PresencePayload {
            state: self.status_text(),
            details: Some(self.details_text()),
            start: None,
            end: None,
            large_image,
            large_text,
            small_image,
            small_text,
        }
    }

    /// The "state" string. The broadcaster protocol forbids empty strings,
    /// so a blank status renders as an absent field.
    fn status_text(&self) -> Option<String> {
        if !self.visibility.show_status {
            return None;
        }
        let text = self.user_status.as_str();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// The "details" string: faction, team when it differs, and server.
    fn details_text(&self) -> String {
        let faction = self.game_state.faction;
        let team = self.game_state.team;

        let mut details = faction.display_name().to_string();
        // Faction-less characters fight under a team that is not their own
        if team != faction {
            details.push_str(" on ");
            details.push_str(team.tag());
        }
        if self.visibility.show_server {
            details.push_str(" (");
            details.push_str(self.game_state.server.display_name());
            details.push(')');
        }
        details
    }

    fn zone_assets(&self) -> (Option<String>, Option<String>) {
        if !self.visibility.show_zone {
            return (None, None);
        }
        let zone = self.game_state.zone;
        (
            Some(zone.asset_key().to_string()),
            Some(zone.display_name().to_string()),
        )
    }

    fn profile_assets(&self) -> (Option<String>, Option<String>) {
        if !self.visibility.show_profile {
            return (None, None);
        }
        let profile = self.game_state.profile;
        let text = match profile {
            Profile::Class(class) => {
                format!("Last seen playing {}", class.display_name())
            }
            Profile::Vehicle(vehicle) => {
                let name = vehicle.display_name();
                let article = match name.chars().next().map(|c| c.to_ascii_lowercase()) {
                    Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
                    _ => "a",
                };
                format!("Last seen in {article} {name}")
            }
        };
        (Some(profile.asset_key().to_string()), Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::{Class, Faction, Server, Vehicle, Zone};

    fn nc_on_emerald() -> GameState {
        GameState {
            character_id: 42,
            faction: Faction::Nc,
            team: Faction::Nc,
            server: Server::Emerald,
            profile: Profile::Class(Class::HeavyAssault),
            zone: Zone::Hossin,
        }
    }

    fn factory(state: GameState) -> PresenceFactory {
        PresenceFactory::new(state, UserStatus::Default, VisibilityConfig::default())
    }

    #[test]
    fn test_full_payload() {
        let payload = factory(nc_on_emerald()).build_presence();

        assert_eq!(payload.state, None);
        assert_eq!(
            payload.details.as_deref(),
            Some("New Conglomerate (Emerald)")
        );
        assert_eq!(payload.large_image.as_deref(), Some("hossin"));
        assert_eq!(payload.large_text.as_deref(), Some("Hossin"));
        assert_eq!(payload.small_image.as_deref(), Some("heavy_assault"));
        assert_eq!(
            payload.small_text.as_deref(),
            Some("Last seen playing Heavy Assault")
        );
        assert_eq!(payload.start, None);
        assert_eq!(payload.end, None);
    }

    #[test]
    fn test_blank_status_is_absent_not_empty() {
        let payload = factory(nc_on_emerald()).build_presence();
        assert_eq!(payload.state, None);
    }

    #[test]
    fn test_status_is_rendered_verbatim() {
        let mut factory = factory(nc_on_emerald());
        factory.update_user_status(UserStatus::Solo);
        assert_eq!(
            factory.build_presence().state.as_deref(),
            Some("Playing Solo")
        );
    }

    #[test]
    fn test_team_differs_from_faction() {
        let mut state = nc_on_emerald();
        state.faction = Faction::Nso;
        state.team = Faction::Tr;

        let payload = factory(state).build_presence();
        assert_eq!(
            payload.details.as_deref(),
            Some("Nanite Systems Operators on TR (Emerald)")
        );
    }

    #[test]
    fn test_vehicle_article_selection() {
        let mut state = nc_on_emerald();

        state.profile = Profile::Vehicle(Vehicle::Ant);
        assert_eq!(
            factory(state).build_presence().small_text.as_deref(),
            Some("Last seen in an ANT")
        );

        state.profile = Profile::Vehicle(Vehicle::Flash);
        assert_eq!(
            factory(state).build_presence().small_text.as_deref(),
            Some("Last seen in a Flash")
        );

        state.profile = Profile::Vehicle(Vehicle::Interceptor);
        assert_eq!(
            factory(state).build_presence().small_text.as_deref(),
            Some("Last seen in an Interceptor")
        );
    }

    #[test]
    fn test_build_presence_is_idempotent() {
        let mut factory = factory(nc_on_emerald());
        factory.update_user_status(UserStatus::Ops);
        assert_eq!(factory.build_presence(), factory.build_presence());
    }

    #[test]
    fn test_visibility_toggles() {
        let mut factory = factory(nc_on_emerald());
        factory.update_user_status(UserStatus::Idle);
        factory.update_visibility(VisibilityConfig {
            show_status: false,
            show_server: false,
            show_zone: false,
            show_profile: false,
        });

        let payload = factory.build_presence();
        assert_eq!(payload.state, None);
        assert_eq!(payload.details.as_deref(), Some("New Conglomerate"));
        assert_eq!(payload.large_image, None);
        assert_eq!(payload.large_text, None);
        assert_eq!(payload.small_image, None);
        assert_eq!(payload.small_text, None);
    }

    #[test]
    fn test_updated_game_state_flows_through() {
        let mut factory = factory(nc_on_emerald());
        let mut state = nc_on_emerald();
        state.zone = Zone::Esamir;
        factory.update_game_state(state);

        let payload = factory.build_presence();
        assert_eq!(payload.large_image.as_deref(), Some("esamir"));
        assert_eq!(payload.large_text.as_deref(), Some("Esamir"));
    }
}
