//! Seam to the external character/world lookup service.

use async_trait::async_trait;
use thiserror::Error;

use crate::game_data::{CharacterId, FactionId, ProfileId, WorldId};

/// Persistent character data returned by the roster lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterInfo {
    /// Most recently used infantry class, as a profile id.
    pub profile_id: ProfileId,
    pub faction_id: FactionId,
}

/// Lookup failures. Service timeouts and unreachability surface as these
/// same outcomes; the tracker treats them all as terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),
    #[error("world unavailable for character {0}")]
    WorldUnavailable(CharacterId),
}

/// Read-only access to the character roster and world placement.
#[async_trait]
pub trait CharacterLookup: Send + Sync {
    async fn character_info(
        &self,
        character_id: CharacterId,
    ) -> Result<CharacterInfo, LookupError>;

    async fn character_world(&self, character_id: CharacterId)
    -> Result<WorldId, LookupError>;
}
