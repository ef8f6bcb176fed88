use phf::phf_map;
use serde::{Deserialize, Serialize};

use super::ids::{LoadoutId, ProfileId};

/// An infantry class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    Infiltrator,
    LightAssault,
    CombatMedic,
    Engineer,
    HeavyAssault,
    Max,
}

/// Loadout id → class, keyed per faction (NC/TR/VS/NSO).
static LOADOUT_CLASSES: phf::Map<u32, Class> = phf_map! {
    // Infiltrator
    1u32 => Class::Infiltrator,
    8u32 => Class::Infiltrator,
    15u32 => Class::Infiltrator,
    28u32 => Class::Infiltrator,
    // Light Assault
    3u32 => Class::LightAssault,
    10u32 => Class::LightAssault,
    17u32 => Class::LightAssault,
    29u32 => Class::LightAssault,
    // Combat Medic
    4u32 => Class::CombatMedic,
    11u32 => Class::CombatMedic,
    18u32 => Class::CombatMedic,
    30u32 => Class::CombatMedic,
    // Engineer
    5u32 => Class::Engineer,
    12u32 => Class::Engineer,
    19u32 => Class::Engineer,
    31u32 => Class::Engineer,
    // Heavy Assault
    6u32 => Class::HeavyAssault,
    13u32 => Class::HeavyAssault,
    20u32 => Class::HeavyAssault,
    32u32 => Class::HeavyAssault,
    // MAX
    7u32 => Class::Max,
    14u32 => Class::Max,
    21u32 => Class::Max,
    45u32 => Class::Max,
};

/// Persistent profile id → class, keyed per faction (NC/TR/VS/NSO).
static PROFILE_CLASSES: phf::Map<u32, Class> = phf_map! {
    // Infiltrator
    2u32 => Class::Infiltrator,
    10u32 => Class::Infiltrator,
    17u32 => Class::Infiltrator,
    190u32 => Class::Infiltrator,
    // Light Assault
    4u32 => Class::LightAssault,
    12u32 => Class::LightAssault,
    19u32 => Class::LightAssault,
    191u32 => Class::LightAssault,
    // Combat Medic
    5u32 => Class::CombatMedic,
    13u32 => Class::CombatMedic,
    20u32 => Class::CombatMedic,
    192u32 => Class::CombatMedic,
    // Engineer
    6u32 => Class::Engineer,
    14u32 => Class::Engineer,
    21u32 => Class::Engineer,
    193u32 => Class::Engineer,
    // Heavy Assault
    7u32 => Class::HeavyAssault,
    15u32 => Class::HeavyAssault,
    22u32 => Class::HeavyAssault,
    194u32 => Class::HeavyAssault,
    // MAX
    8u32 => Class::Max,
    16u32 => Class::Max,
    23u32 => Class::Max,
    252u32 => Class::Max,
};

impl Class {
    /// Class for a per-event loadout id. Unknown codes fall back to
    /// Light Assault.
    pub fn from_loadout_id(loadout_id: LoadoutId) -> Class {
        LOADOUT_CLASSES
            .get(&loadout_id)
            .copied()
            .unwrap_or(Class::LightAssault)
    }

    /// Class for a persistent profile id. Unknown codes fall back to
    /// Light Assault.
    pub fn from_profile_id(profile_id: ProfileId) -> Class {
        PROFILE_CLASSES
            .get(&profile_id)
            .copied()
            .unwrap_or(Class::LightAssault)
    }

    /// Human-readable class name. MAX keeps its acronym.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Infiltrator => "Infiltrator",
            Self::LightAssault => "Light Assault",
            Self::CombatMedic => "Combat Medic",
            Self::Engineer => "Engineer",
            Self::HeavyAssault => "Heavy Assault",
            Self::Max => "MAX",
        }
    }

    /// Image asset key for this class.
    pub fn asset_key(&self) -> &'static str {
        match self {
            Self::Infiltrator => "infiltrator",
            Self::LightAssault => "light_assault",
            Self::CombatMedic => "combat_medic",
            Self::Engineer => "engineer",
            Self::HeavyAssault => "heavy_assault",
            Self::Max => "max",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loadout_lookup_per_faction() {
        // Heavy Assault across all four factions
        for id in [6, 13, 20, 32] {
            assert_eq!(Class::from_loadout_id(id), Class::HeavyAssault);
        }
        assert_eq!(Class::from_loadout_id(1), Class::Infiltrator);
        assert_eq!(Class::from_loadout_id(45), Class::Max);
    }

    #[test]
    fn test_unknown_loadout_falls_back_to_light_assault() {
        assert_eq!(Class::from_loadout_id(0), Class::LightAssault);
        assert_eq!(Class::from_loadout_id(9999), Class::LightAssault);
    }

    #[test]
    fn test_profile_lookup_per_faction() {
        for id in [5, 13, 20, 192] {
            assert_eq!(Class::from_profile_id(id), Class::CombatMedic);
        }
        assert_eq!(Class::from_profile_id(252), Class::Max);
        assert_eq!(Class::from_profile_id(1234), Class::LightAssault);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Class::HeavyAssault.display_name(), "Heavy Assault");
        assert_eq!(Class::Max.display_name(), "MAX");
    }

    #[test]
    fn test_asset_keys_are_lower_snake() {
        assert_eq!(Class::LightAssault.asset_key(), "light_assault");
        assert_eq!(Class::Max.asset_key(), "max");
    }
}
