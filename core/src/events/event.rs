//! Events delivered by the push-style game event feed.

use serde::{Deserialize, Serialize};

use crate::game_data::{CharacterId, FactionId, LoadoutId, VehicleId, ZoneId};

/// A combat death. The tracked character can appear on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathEvent {
    pub character_id: CharacterId,
    pub attacker_character_id: CharacterId,
    pub character_loadout_id: LoadoutId,
    pub attacker_loadout_id: LoadoutId,
    pub zone_id: ZoneId,
    /// Not sent by the live feed anymore as of March 2022; used when it
    /// returns. An id of 0 means "no vehicle".
    #[serde(default)]
    pub attacker_vehicle_id: Option<VehicleId>,
    /// Team ids are a recent feed addition and may be absent.
    #[serde(default)]
    pub team_id: Option<FactionId>,
    #[serde(default)]
    pub attacker_team_id: Option<FactionId>,
}

/// An experience tick for a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEvent {
    pub character_id: CharacterId,
    pub loadout_id: LoadoutId,
    pub zone_id: ZoneId,
}

/// Any event the feed can deliver to a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Death(DeathEvent),
    Experience(ExperienceEvent),
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Death(_) => EventKind::Death,
            Self::Experience(_) => EventKind::GainExperience,
        }
    }

    /// Whether the given character appears on either side of the event.
    pub fn involves(&self, character_id: CharacterId) -> bool {
        match self {
            Self::Death(evt) => {
                evt.character_id == character_id || evt.attacker_character_id == character_id
            }
            Self::Experience(evt) => evt.character_id == character_id,
        }
    }
}

/// Event types a subscription can register interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Death,
    GainExperience,
}

/// Interest registration for the event feed: which event types, for which
/// characters (matched on either side of a combat interaction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionFilter {
    pub events: Vec<EventKind>,
    pub characters: Vec<CharacterId>,
}

impl SubscriptionFilter {
    /// The filter an activity tracker uses: deaths and experience ticks for
    /// one character.
    pub fn for_character(character_id: CharacterId) -> Self {
        Self {
            events: vec![EventKind::Death, EventKind::GainExperience],
            characters: vec![character_id],
        }
    }

    /// Whether an event matches this filter.
    pub fn matches(&self, event: &GameEvent) -> bool {
        self.events.contains(&event.kind())
            && self.characters.iter().any(|&id| event.involves(id))
    }
}
