//! User-selectable status strings for the presence "state" field.
//!
//! The game client has no integration of its own, so the status shown next
//! to the tracked activity is picked by the user from a fixed vocabulary.
//! Adding a new entry here is all that is needed to make it selectable.

use serde::{Deserialize, Serialize};

/// A user-chosen status label, independent of the tracked game state.
///
/// `Default` renders as an absent field, never as an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Default,
    Idle,
    Solo,
    Zerg,
    // Squad / team play
    LookingForSquad,
    InSquad,
    Ops,
    // Memery
    Carrots,
    Directives,
    Ghostcapping,
}

/// All statuses in the order a selection widget should list them.
pub const ALL_STATUSES: &[UserStatus] = &[
    UserStatus::Default,
    UserStatus::Idle,
    UserStatus::Solo,
    UserStatus::Zerg,
    UserStatus::LookingForSquad,
    UserStatus::InSquad,
    UserStatus::Ops,
    UserStatus::Carrots,
    UserStatus::Directives,
    UserStatus::Ghostcapping,
];

impl UserStatus {
    /// The display string; empty for [`UserStatus::Default`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Idle => "Idling",
            Self::Solo => "Playing Solo",
            Self::Zerg => "Zerging along",
            Self::LookingForSquad => "Looking for Squad",
            Self::InSquad => "In a Squad",
            Self::Ops => "Playing Ops",
            Self::Carrots => "Looking for Carrots",
            Self::Directives => "Grinding Directives",
            Self::Ghostcapping => "Ghostcapping",
        }
    }

    /// Whether this is the blank default status.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Status at the given selection index, matching [`ALL_STATUSES`] order.
    pub fn from_index(index: usize) -> Option<UserStatus> {
        ALL_STATUSES.get(index).copied()
    }

    /// Status whose display string equals `label`, if any.
    pub fn from_label(label: &str) -> Option<UserStatus> {
        ALL_STATUSES.iter().copied().find(|s| s.as_str() == label)
    }
}
