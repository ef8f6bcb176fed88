use phf::phf_map;
use serde::{Deserialize, Serialize};

use super::ids::WorldId;

/// A physical game server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Server {
    Connery,
    Miller,
    Cobalt,
    Emerald,
    Jaeger,
    SolTech,
}

static WORLD_SERVERS: phf::Map<u32, Server> = phf_map! {
    1u32 => Server::Connery,
    10u32 => Server::Miller,
    13u32 => Server::Cobalt,
    17u32 => Server::Emerald,
    19u32 => Server::Jaeger,
    40u32 => Server::SolTech,
};

impl Server {
    /// Server for a world id. Unknown ids resolve to `fallback`, which is
    /// sourced from the application configuration.
    pub fn from_world_id(world_id: WorldId, fallback: Server) -> Server {
        WORLD_SERVERS.get(&world_id).copied().unwrap_or(fallback)
    }

    /// Human-readable server name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Connery => "Connery",
            Self::Miller => "Miller",
            Self::Cobalt => "Cobalt",
            Self::Emerald => "Emerald",
            Self::Jaeger => "Jaeger",
            Self::SolTech => "SolTech",
        }
    }
}
