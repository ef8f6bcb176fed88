use serde::{Deserialize, Serialize};

use super::ids::FactionId;

/// A playable faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Vs,
    Nc,
    Tr,
    Nso,
}

impl Faction {
    /// Faction for a faction id. Unknown ids fall back to NSO, the
    /// faction-less player pool.
    pub fn from_faction_id(faction_id: FactionId) -> Faction {
        match faction_id {
            1 => Faction::Vs,
            2 => Faction::Nc,
            3 => Faction::Tr,
            _ => Faction::Nso,
        }
    }

    /// Short faction tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Vs => "VS",
            Self::Nc => "NC",
            Self::Tr => "TR",
            Self::Nso => "NSO",
        }
    }

    /// Full faction name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vs => "Vanu Sovereignty",
            Self::Nc => "New Conglomerate",
            Self::Tr => "Terran Republic",
            Self::Nso => "Nanite Systems Operators",
        }
    }
}
