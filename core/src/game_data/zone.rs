use phf::phf_map;
use serde::{Deserialize, Serialize};

use super::ids::ZoneId;

/// A zone (continent or instance) a character can be in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Default zone, used upon login and for unrecognized ids.
    #[default]
    Sanctuary,
    Indar,
    Hossin,
    Amerish,
    Esamir,
    Desolation,
    Tutorial,
    VrTraining,
}

static ZONE_IDS: phf::Map<u32, Zone> = phf_map! {
    2u32 => Zone::Indar,
    4u32 => Zone::Hossin,
    6u32 => Zone::Amerish,
    8u32 => Zone::Esamir,
    // One VR instance per faction
    96u32 => Zone::VrTraining,
    97u32 => Zone::VrTraining,
    98u32 => Zone::VrTraining,
    361u32 => Zone::Desolation,
    362u32 => Zone::Sanctuary,
    364u32 => Zone::Tutorial,
};

impl Zone {
    /// Zone for a zone id. Dynamic or unrecognized ids fall back to
    /// Sanctuary.
    pub fn from_zone_id(zone_id: ZoneId) -> Zone {
        ZONE_IDS.get(&zone_id).copied().unwrap_or_default()
    }

    /// Human-readable zone name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sanctuary => "Sanctuary",
            Self::Indar => "Indar",
            Self::Hossin => "Hossin",
            Self::Amerish => "Amerish",
            Self::Esamir => "Esamir",
            Self::Desolation => "Desolation",
            Self::Tutorial => "Tutorial",
            Self::VrTraining => "VR Training",
        }
    }

    /// Image asset key for this zone.
    pub fn asset_key(&self) -> &'static str {
        match self {
            Self::Sanctuary => "sanctuary",
            Self::Indar => "indar",
            Self::Hossin => "hossin",
            Self::Amerish => "amerish",
            Self::Esamir => "esamir",
            Self::Desolation => "desolation",
            Self::Tutorial => "tutorial",
            Self::VrTraining => "vr_training",
        }
    }
}
