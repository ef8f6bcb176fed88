//! Per-field visibility toggles for the generated presence payload.

use serde::{Deserialize, Serialize};

/// Controls which optional parts of the presence payload are populated.
///
/// Fields that are toggled off are omitted from the payload entirely rather
/// than rendered as placeholder text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// The user-chosen status string ("state" field).
    pub show_status: bool,
    /// The server name appended to the details line.
    pub show_server: bool,
    /// The zone image and its hover text.
    pub show_zone: bool,
    /// The class/vehicle image and its hover text.
    pub show_profile: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            show_status: true,
            show_server: true,
            show_zone: true,
            show_profile: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_visible_by_default() {
        let config = VisibilityConfig::default();
        assert!(config.show_status);
        assert!(config.show_server);
        assert!(config.show_zone);
        assert!(config.show_profile);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: VisibilityConfig = toml::from_str("show_zone = false").unwrap();
        assert!(!config.show_zone);
        assert!(config.show_status);
        assert!(config.show_profile);
    }
}
