// Dashboard configuration loaded from config/dashboard.toml
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub feed: FeedSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedSettings {
    #[serde(default = "default_feed_url")]
    pub url: String,
    #[serde(default = "default_feed_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_timestamp_field")]
    pub timestamp_field: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    /// Whether a sensor or group that has never been toggled starts hidden.
    #[serde(default)]
    pub default_hidden: bool,
    #[serde(default = "default_preset_token")]
    pub default_preset: String,
    #[serde(default = "default_stats_priority")]
    pub stats_priority: Vec<String>,
    /// Thin chart submissions down to this many points per series; 0 keeps
    /// full resolution.
    #[serde(default)]
    pub max_points_per_series: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSettings {
    /// "light", "dark", or "auto" (follow the system, fall back to dark).
    #[serde(default = "default_theme_mode")]
    pub mode: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    #[serde(default = "default_groups_path")]
    pub groups_path: String,
}

fn default_feed_url() -> String {
    "https://raw.githubusercontent.com/maximecoic/tempe/main/data.json".to_string()
}

fn default_feed_timeout_secs() -> u64 {
    30
}

fn default_timestamp_field() -> String {
    "Heure".to_string()
}

fn default_preset_token() -> String {
    "6h".to_string()
}

fn default_stats_priority() -> Vec<String> {
    ["Paris", "Bureau", "Chambre", "SdB"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_theme_mode() -> String {
    "auto".to_string()
}

fn default_groups_path() -> String {
    "data/groups.json".to_string()
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_feed_timeout_secs(),
            timestamp_field: default_timestamp_field(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_hidden: false,
            default_preset: default_preset_token(),
            stats_priority: default_stats_priority(),
            max_points_per_series: 0,
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: default_theme_mode(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            groups_path: default_groups_path(),
        }
    }
}

/// Load `config/dashboard.toml`; a missing file falls back to defaults so
/// the dashboard runs out of the box.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_knob() {
        let config = DashboardConfig::default();
        assert!(config.feed.url.ends_with("data.json"));
        assert_eq!(config.feed.timestamp_field, "Heure");
        assert_eq!(config.display.default_preset, "6h");
        assert!(!config.display.default_hidden);
        assert_eq!(config.display.stats_priority.len(), 4);
        assert_eq!(config.display.max_points_per_series, 0);
        assert_eq!(config.theme.mode, "auto");
        assert_eq!(config.storage.groups_path, "data/groups.json");
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let raw = r#"
            [feed]
            timestamp_field = "Time"

            [display]
            default_hidden = true
            default_preset = "day"
        "#;
        let config: DashboardConfig = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.feed.timestamp_field, "Time");
        // Unset fields in a present section still default
        assert_eq!(config.feed.timeout_secs, 30);
        assert!(config.display.default_hidden);
        assert_eq!(config.display.default_preset, "day");
        assert_eq!(config.theme.mode, "auto");
    }
}
