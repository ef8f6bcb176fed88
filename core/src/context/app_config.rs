//! Persisted application configuration.

use aurex_types::{UserStatus, VisibilityConfig};
use serde::{Deserialize, Serialize};

use crate::game_data::Server;

const APP_NAME: &str = "aurex";

/// User-facing settings, persisted in the platform config directory.
///
/// Tracked-character lists are deliberately not part of this; a tracker
/// lives only as long as its task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server assumed when the world lookup returns an unknown id.
    pub default_server: Server,
    /// Last status the user picked.
    pub status: UserStatus,
    pub visibility: VisibilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_server: Server::Jaeger,
            status: UserStatus::default(),
            visibility: VisibilityConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        match confy::load(APP_NAME, None) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(APP_NAME, None, self) {
            tracing::warn!(error = %e, "failed to save config");
        }
    }
}
