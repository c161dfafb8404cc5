// Control-panel and stats-panel projections for an embedding UI
use crate::application::controller::DashboardController;
use crate::domain::stats::StatRow;
use crate::domain::style::{sensor_icon, Theme};
use crate::domain::window::RangePreset;

/// One toggle button. `icon` is a Font Awesome token when a rule matches;
/// otherwise the button is labeled with the name.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlButton {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub color: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresetButton {
    pub token: &'static str,
    pub active: bool,
}

/// Pure projection of the dashboard state into the controls an embedding
/// UI renders: sensor and group toggles, range presets, theme.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    pub sensors: Vec<ControlButton>,
    pub groups: Vec<ControlButton>,
    pub presets: Vec<PresetButton>,
    pub theme: Theme,
}

impl ControlPanel {
    pub fn project(controller: &DashboardController) -> Self {
        let sensors = controller
            .sensor_series()
            .iter()
            .map(|series| ControlButton {
                id: series.id.clone(),
                label: series.name.clone(),
                icon: sensor_icon(&series.name).map(|icon| icon.to_string()),
                color: series.color.clone(),
                active: !controller.visibility().is_hidden(&series.id),
            })
            .collect();

        let groups = controller
            .groups()
            .iter()
            .map(|group| ControlButton {
                id: group.id.clone(),
                label: group.name.clone(),
                icon: Some(group.icon.clone()),
                color: group.color.clone(),
                active: !controller.visibility().is_hidden(&group.id),
            })
            .collect();

        let presets = RangePreset::ALL
            .iter()
            .map(|preset| PresetButton {
                token: preset.token(),
                active: controller.active_preset() == Some(*preset),
            })
            .collect();

        Self {
            sensors,
            groups,
            presets,
            theme: controller.theme(),
        }
    }
}

/// A stat row rendered to display strings, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub name: String,
    pub color: String,
    pub dimmed: bool,
    pub last: String,
    pub range: String,
}

pub fn stat_lines(rows: &[StatRow]) -> Vec<StatLine> {
    rows.iter()
        .map(|row| StatLine {
            name: row.name.clone(),
            color: row.color.clone(),
            dimmed: row.hidden,
            last: format_reading(row.last),
            range: format!(
                "Min: {} | Max: {}",
                format_reading(row.min),
                format_reading(row.max)
            ),
        })
        .collect()
}

fn format_reading(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}°C"),
        None => "--".to_string(),
    }
}
