// Headless chart surface that records what it is told to draw
use crate::application::chart_surface::{ChartSurface, ChartView};
use crate::domain::scale::ValueBounds;
use crate::domain::window::TimeWindow;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct SurfaceState {
    last_view: Option<ChartView>,
    hidden: HashMap<String, bool>,
    window: Option<TimeWindow>,
    bounds: Option<ValueBounds>,
}

/// Stand-in for a real rendering surface: it keeps the last submission
/// and logs what would be drawn. Clones share state, so a caller can hand
/// one clone to the controller and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_view(&self) -> Option<ChartView> {
        self.state.lock().unwrap().last_view.clone()
    }

    pub fn hidden_flag(&self, id: &str) -> Option<bool> {
        self.state.lock().unwrap().hidden.get(id).copied()
    }

    pub fn window(&self) -> Option<TimeWindow> {
        self.state.lock().unwrap().window
    }

    pub fn bounds(&self) -> Option<ValueBounds> {
        self.state.lock().unwrap().bounds
    }

    /// Pretend the user panned or zoomed to `window`, as a real surface
    /// would before firing its completion callback.
    pub fn simulate_pan_zoom(&self, window: TimeWindow) {
        self.state.lock().unwrap().window = Some(window);
    }
}

impl ChartSurface for HeadlessSurface {
    fn render(&mut self, view: ChartView) {
        tracing::debug!(
            "Rendering {} series ({} theme), window {}..{}",
            view.series.len(),
            view.theme.as_str(),
            view.window.start_ms,
            view.window.end_ms
        );
        let mut state = self.state.lock().unwrap();
        state.hidden = view
            .series
            .iter()
            .map(|s| (s.series.id.clone(), s.hidden))
            .collect();
        state.window = Some(view.window);
        state.bounds = Some(view.bounds);
        state.last_view = Some(view);
    }

    fn set_series_hidden(&mut self, id: &str, hidden: bool) {
        self.state
            .lock()
            .unwrap()
            .hidden
            .insert(id.to_string(), hidden);
    }

    fn set_time_window(&mut self, window: TimeWindow) {
        self.state.lock().unwrap().window = Some(window);
    }

    fn set_value_bounds(&mut self, bounds: ValueBounds) {
        tracing::debug!("Value axis {}..{}", bounds.min, bounds.max);
        self.state.lock().unwrap().bounds = Some(bounds);
    }

    fn visible_window(&self) -> Option<TimeWindow> {
        self.state.lock().unwrap().window
    }
}
