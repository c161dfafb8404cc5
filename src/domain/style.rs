// Themes, the series color palette, and sensor icon rules

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Resolve a configured mode: "light" and "dark" force the theme,
    /// anything else follows the system preference and falls back to dark.
    pub fn resolve(mode: &str, system_prefers_light: Option<bool>) -> Self {
        match mode {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => match system_prefers_light {
                Some(true) => Self::Light,
                _ => Self::Dark,
            },
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

const BASE_COLORS: [&str; 10] = [
    "#64ffda", // Teal
    "#3a86ff", // Blue
    "#ff006e", // Pink
    "#8338ec", // Purple
    "#ffbe0b", // Yellow
    "#fb5607", // Orange
    "#00b4d8", // Light Blue
    "#06d6a0", // Mint
    "#ef476f", // Rose
    "#118ab2", // Dark Blue
];

/// Display color for the series at `index`. The first ten come from a fixed
/// palette; past that, hues are spaced by the golden angle.
pub fn series_color(index: usize) -> String {
    match BASE_COLORS.get(index) {
        Some(color) => (*color).to_string(),
        None => {
            let hue = ((index - BASE_COLORS.len()) as f64 * 137.5) % 360.0;
            format!("hsl({hue}, 70%, 60%)")
        }
    }
}

// Ordered icon rules: exact name match first, then case-insensitive
// containment, first rule wins.
const SENSOR_ICONS: [(&str, &str); 6] = [
    ("Paris", "fa-landmark"),
    ("Bureau", "fa-desktop"),
    ("Bureau 1", "fa-desktop"),
    ("Bureau 2", "fa-desktop"),
    ("Chambre", "fa-bed"),
    ("SdB", "fa-shower"),
];

/// Icon token for a sensor name, or `None` when no rule matches (the
/// embedding UI then labels the control with the name itself).
pub fn sensor_icon(name: &str) -> Option<&'static str> {
    if let Some((_, icon)) = SENSOR_ICONS.iter().find(|(key, _)| *key == name) {
        return Some(icon);
    }
    let lower = name.to_lowercase();
    SENSOR_ICONS
        .iter()
        .find(|(key, _)| lower.contains(&key.to_lowercase()))
        .map(|(_, icon)| *icon)
}
