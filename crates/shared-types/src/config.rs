use serde::{Deserialize, Serialize};

fn default_max_public_cameras() -> usize {
    8
}

fn default_featured_cameras() -> usize {
    4
}

fn default_app_version() -> String {
    "2.1.0".to_string()
}

/// Presentation knobs for the dashboard shell.
///
/// Defaults match the deployed product; a `citywatch.toml` can override
/// individual fields without restating the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// How many cameras an anonymous viewer sees in the grid before the
    /// remainder collapses into a placeholder card.
    #[serde(default = "default_max_public_cameras")]
    pub max_public_cameras: usize,
    /// How many cameras the home page feature strip shows.
    #[serde(default = "default_featured_cameras")]
    pub featured_cameras: usize,
    /// Version string shown on the settings system tab.
    #[serde(default = "default_app_version")]
    pub app_version: String,
    /// Shows the development build banner. Off in production.
    #[serde(default)]
    pub show_dev_overlay: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            max_public_cameras: default_max_public_cameras(),
            featured_cameras: default_featured_cameras(),
            app_version: default_app_version(),
            show_dev_overlay: false,
        }
    }
}

/// Top-level config file structure matching `citywatch.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployed_product() {
        let config = UiConfig::default();
        assert_eq!(config.max_public_cameras, 8);
        assert_eq!(config.featured_cameras, 4);
        assert_eq!(config.app_version, "2.1.0");
        assert!(!config.show_dev_overlay);
    }

    #[test]
    fn dev_overlay_can_be_switched_on_in_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            show_dev_overlay = true
            "#,
        )
        .unwrap();
        assert!(config.ui.show_dev_overlay);
        assert_eq!(config.ui.max_public_cameras, 8);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            max_public_cameras = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.max_public_cameras, 4);
        assert_eq!(config.ui.featured_cameras, 4);
        assert_eq!(config.ui.app_version, "2.1.0");
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let config: UiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, UiConfig::default());
    }
}
