use phf::phf_map;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::VehicleId;

/// Raised when a vehicle id has no known mapping. Callers are expected to
/// keep their previous profile rather than propagate this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown vehicle id {0}")]
pub struct UnknownVehicle(pub VehicleId);

/// A vehicle a character can be seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vehicle {
    Flash,
    Sunderer,
    Lightning,
    Magrider,
    Vanguard,
    Prowler,
    Scythe,
    Reaver,
    Mosquito,
    Liberator,
    Galaxy,
    Harasser,
    Valkyrie,
    Ant,
    AiTurret,
    AaTurret,
    AvTurret,
    Colossus,
    Bastion,
    Javelin,
    Interceptor,
    Dervish,
}

static VEHICLE_IDS: phf::Map<u32, Vehicle> = phf_map! {
    1u32 => Vehicle::Flash,
    2u32 => Vehicle::Sunderer,
    3u32 => Vehicle::Lightning,
    4u32 => Vehicle::Magrider,
    5u32 => Vehicle::Vanguard,
    6u32 => Vehicle::Prowler,
    7u32 => Vehicle::Scythe,
    8u32 => Vehicle::Reaver,
    9u32 => Vehicle::Mosquito,
    10u32 => Vehicle::Liberator,
    11u32 => Vehicle::Galaxy,
    12u32 => Vehicle::Harasser,
    14u32 => Vehicle::Valkyrie,
    15u32 => Vehicle::Ant,
    100u32 => Vehicle::AiTurret,
    150u32 => Vehicle::AaTurret,
    151u32 => Vehicle::AvTurret,
    2007u32 => Vehicle::Colossus,
    2019u32 => Vehicle::Bastion,
    // Javelin variants share one identity
    2033u32 => Vehicle::Javelin,
    2125u32 => Vehicle::Javelin,
    2129u32 => Vehicle::Javelin,
    // Faction-specific Interceptors collapse to one name
    2023u32 => Vehicle::Interceptor,
    2122u32 => Vehicle::Interceptor,
    2124u32 => Vehicle::Interceptor,
    2136u32 => Vehicle::Dervish,
};

impl Vehicle {
    /// Vehicle for a vehicle id. Unlike the other conversions this one is
    /// partial; id 0 means "no vehicle" and is the caller's job to filter.
    pub fn from_vehicle_id(vehicle_id: VehicleId) -> Result<Vehicle, UnknownVehicle> {
        VEHICLE_IDS
            .get(&vehicle_id)
            .copied()
            .ok_or(UnknownVehicle(vehicle_id))
    }

    /// Human-readable vehicle name. Acronym names stay upper-cased.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Flash => "Flash",
            Self::Sunderer => "Sunderer",
            Self::Lightning => "Lightning",
            Self::Magrider => "Magrider",
            Self::Vanguard => "Vanguard",
            Self::Prowler => "Prowler",
            Self::Scythe => "Scythe",
            Self::Reaver => "Reaver",
            Self::Mosquito => "Mosquito",
            Self::Liberator => "Liberator",
            Self::Galaxy => "Galaxy",
            Self::Harasser => "Harasser",
            Self::Valkyrie => "Valkyrie",
            Self::Ant => "ANT",
            Self::AiTurret => "AI Turret",
            Self::AaTurret => "AA Turret",
            Self::AvTurret => "AV Turret",
            Self::Colossus => "Colossus",
            Self::Bastion => "Bastion",
            Self::Javelin => "Javelin",
            Self::Interceptor => "Interceptor",
            Self::Dervish => "Dervish",
        }
    }

    /// Image asset key for this vehicle.
    pub fn asset_key(&self) -> &'static str {
        match self {
            Self::Flash => "flash",
            Self::Sunderer => "sunderer",
            Self::Lightning => "lightning",
            Self::Magrider => "magrider",
            Self::Vanguard => "vanguard",
            Self::Prowler => "prowler",
            Self::Scythe => "scythe",
            Self::Reaver => "reaver",
            Self::Mosquito => "mosquito",
            Self::Liberator => "liberator",
            Self::Galaxy => "galaxy",
            Self::Harasser => "harasser",
            Self::Valkyrie => "valkyrie",
            Self::Ant => "ant",
            Self::AiTurret => "ai_turret",
            Self::AaTurret => "aa_turret",
            Self::AvTurret => "av_turret",
            Self::Colossus => "colossus",
            Self::Bastion => "bastion",
            Self::Javelin => "javelin",
            Self::Interceptor => "interceptor",
            Self::Dervish => "dervish",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        assert_eq!(Vehicle::from_vehicle_id(1), Ok(Vehicle::Flash));
        assert_eq!(Vehicle::from_vehicle_id(15), Ok(Vehicle::Ant));
        assert_eq!(Vehicle::from_vehicle_id(2136), Ok(Vehicle::Dervish));
    }

    #[test]
    fn test_variant_families_collapse() {
        for id in [2033, 2125, 2129] {
            assert_eq!(Vehicle::from_vehicle_id(id), Ok(Vehicle::Javelin));
        }
        for id in [2023, 2122, 2124] {
            assert_eq!(Vehicle::from_vehicle_id(id), Ok(Vehicle::Interceptor));
        }
        assert_eq!(Vehicle::Interceptor.display_name(), "Interceptor");
    }

    #[test]
    fn test_unknown_id_fails() {
        assert_eq!(Vehicle::from_vehicle_id(9000), Err(UnknownVehicle(9000)));
        // 0 is "no vehicle" in the feed; the lookup itself still rejects it
        assert_eq!(Vehicle::from_vehicle_id(0), Err(UnknownVehicle(0)));
    }

    #[test]
    fn test_acronym_display_names() {
        assert_eq!(Vehicle::Ant.display_name(), "ANT");
        assert_eq!(Vehicle::AaTurret.display_name(), "AA Turret");
        assert_eq!(Vehicle::Ant.asset_key(), "ant");
        assert_eq!(Vehicle::AiTurret.asset_key(), "ai_turret");
    }
}
