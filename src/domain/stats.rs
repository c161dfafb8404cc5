// Summary rows for the stats panel
use crate::domain::series::Series;
use crate::domain::visibility::VisibilityState;
use crate::domain::window::TimeWindow;

/// One row per series, hidden ones included so a hidden sensor's live
/// value stays readable. `last` ignores the window; `min`/`max` are
/// `None` when no point falls inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub id: String,
    pub name: String,
    pub color: String,
    pub hidden: bool,
    pub last: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Project every series to a row and order for display: visible rows
/// first, priority names leading in list order, the remaining visible
/// rows alphabetically, hidden rows alphabetically at the end.
pub fn compute_stats(
    series: &[Series],
    visibility: &VisibilityState,
    window: TimeWindow,
    priority: &[String],
) -> Vec<StatRow> {
    let mut rows: Vec<StatRow> = series
        .iter()
        .map(|s| {
            let (min, max) = window_extremes(s, window);
            StatRow {
                id: s.id.clone(),
                name: s.name.clone(),
                color: s.color.clone(),
                hidden: visibility.is_hidden(&s.id),
                last: s.last_value(),
                min,
                max,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.hidden.cmp(&b.hidden).then_with(|| {
            if a.hidden {
                a.name.to_lowercase().cmp(&b.name.to_lowercase())
            } else {
                priority_rank(&a.name, priority)
                    .cmp(&priority_rank(&b.name, priority))
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
        })
    });

    rows
}

fn priority_rank(name: &str, priority: &[String]) -> usize {
    priority
        .iter()
        .position(|p| p == name)
        .unwrap_or(priority.len())
}

fn window_extremes(series: &Series, window: TimeWindow) -> (Option<f64>, Option<f64>) {
    let mut extremes: Option<(f64, f64)> = None;
    for point in &series.points {
        if !window.contains(point.time_ms) {
            continue;
        }
        extremes = Some(match extremes {
            Some((min, max)) => (min.min(point.value), max.max(point.value)),
            None => (point.value, point.value),
        });
    }
    (extremes.map(|e| e.0), extremes.map(|e| e.1))
}
