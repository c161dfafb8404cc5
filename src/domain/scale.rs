// Value-axis bounds from the visible series inside the visible window
use crate::domain::series::Series;
use crate::domain::visibility::VisibilityState;
use crate::domain::window::TimeWindow;

const AXIS_PADDING: f64 = 2.0;

/// Returned when nothing visible falls inside the window, so the surface
/// always gets a renderable axis.
pub const FALLBACK_BOUNDS: ValueBounds = ValueBounds { min: 0.0, max: 40.0 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

/// Scan visible series for points inside `window` (inclusive) and pad the
/// observed extremes by two units each side; floor/ceil first so the axis
/// lands on whole degrees. Pure, so re-running with unchanged inputs
/// returns the same bounds.
pub fn value_bounds(
    series: &[Series],
    visibility: &VisibilityState,
    window: TimeWindow,
) -> ValueBounds {
    let mut observed: Option<(f64, f64)> = None;

    for s in series {
        if visibility.is_hidden(&s.id) {
            continue;
        }
        for point in &s.points {
            if !window.contains(point.time_ms) {
                continue;
            }
            observed = Some(match observed {
                Some((min, max)) => (min.min(point.value), max.max(point.value)),
                None => (point.value, point.value),
            });
        }
    }

    match observed {
        Some((min, max)) => ValueBounds {
            min: min.floor() - AXIS_PADDING,
            max: max.ceil() + AXIS_PADDING,
        },
        None => FALLBACK_BOUNDS,
    }
}
