// Dashboard controller - event-driven orchestration of the chart state
use crate::application::chart_surface::{ChartSeries, ChartSurface, ChartView};
use crate::application::feed::ReadingsFeed;
use crate::application::group_store::GroupStore;
use crate::domain::errors::DashboardResult;
use crate::domain::group::Group;
use crate::domain::scale::{value_bounds, ValueBounds};
use crate::domain::series::{Series, SeriesStore};
use crate::domain::stats::{compute_stats, StatRow};
use crate::domain::style::Theme;
use crate::domain::visibility::VisibilityState;
use crate::domain::window::{RangePreset, TimeWindow};
use crate::infrastructure::config::DashboardConfig;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Everything the dashboard mutates after startup, owned by the
/// controller and touched only from its event handlers.
#[derive(Debug)]
pub struct DashboardState {
    store: Option<SeriesStore>,
    series: Vec<Series>,
    groups: Vec<Group>,
    visibility: VisibilityState,
    window: TimeWindow,
    active_preset: Option<RangePreset>,
    theme: Theme,
    stats: Vec<StatRow>,
}

/// User and surface events, applied in arrival order.
#[derive(Debug)]
pub enum DashboardEvent {
    ToggleSensor(String),
    ToggleGroup(String),
    SelectPreset(RangePreset),
    SetExplicitRange {
        start_date: String,
        start_time: String,
        end_date: String,
        end_time: String,
    },
    SetTheme(Theme),
    ViewWindowChanged,
    CreateGroup {
        name: String,
        sensors: Vec<String>,
        icon: String,
        color: String,
    },
}

pub struct DashboardController {
    feed: Arc<dyn ReadingsFeed>,
    group_store: Arc<dyn GroupStore>,
    surface: Box<dyn ChartSurface>,
    timestamp_field: String,
    default_preset: RangePreset,
    stats_priority: Vec<String>,
    max_points_per_series: usize,
    state: DashboardState,
}

impl DashboardController {
    pub fn new(
        feed: Arc<dyn ReadingsFeed>,
        group_store: Arc<dyn GroupStore>,
        surface: Box<dyn ChartSurface>,
        config: &DashboardConfig,
    ) -> Self {
        let default_preset = RangePreset::from_token(&config.display.default_preset)
            .unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown default preset '{}', using 'day'",
                    config.display.default_preset
                );
                RangePreset::Day
            });

        Self {
            feed,
            group_store,
            surface,
            timestamp_field: config.feed.timestamp_field.clone(),
            default_preset,
            stats_priority: config.display.stats_priority.clone(),
            max_points_per_series: config.display.max_points_per_series,
            state: DashboardState {
                store: None,
                series: Vec::new(),
                groups: Vec::new(),
                visibility: VisibilityState::new(config.display.default_hidden),
                window: default_preset.window_ending_at(Utc::now()),
                active_preset: Some(default_preset),
                theme: Theme::resolve(&config.theme.mode, None),
                stats: Vec::new(),
            },
        }
    }

    /// Startup cycle: fetch the feed, build the series, merge persisted
    /// groups in, hand the surface a full view, then apply the default
    /// range preset. Feed failures are terminal for the cycle.
    pub async fn load(&mut self) -> anyhow::Result<()> {
        let records = self.feed.fetch_records().await?;
        tracing::info!("Fetched {} records from the feed", records.len());

        let store = SeriesStore::build(records, &self.timestamp_field)?;
        tracing::debug!("Built {} sensor series", store.series().len());

        self.state.groups = self.group_store.load();
        tracing::debug!("Loaded {} persisted groups", self.state.groups.len());

        self.state.store = Some(store);
        self.rebuild_series();
        self.render_chart();
        self.select_preset(self.default_preset);
        Ok(())
    }

    pub fn toggle_sensor(&mut self, name: &str) -> bool {
        self.toggle_series(name)
    }

    pub fn toggle_group(&mut self, id: &str) -> bool {
        self.toggle_series(id)
    }

    fn toggle_series(&mut self, id: &str) -> bool {
        let hidden = self.state.visibility.toggle(id);
        tracing::debug!("Toggled series {}: hidden={}", id, hidden);
        self.surface.set_series_hidden(id, hidden);
        self.refresh();
        hidden
    }

    pub fn select_preset(&mut self, preset: RangePreset) {
        let window = preset.window_ending_at(Utc::now());
        tracing::debug!("Selected preset {}", preset.token());
        self.state.active_preset = Some(preset);
        self.apply_window(window);
    }

    /// Apply an explicit date/time range. Rejected input (unparseable or
    /// inverted) leaves the current window and the surface untouched.
    pub fn set_explicit_range(
        &mut self,
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> DashboardResult<()> {
        match TimeWindow::from_inputs(start_date, start_time, end_date, end_time) {
            Ok(window) => {
                self.state.active_preset = None;
                self.apply_window(window);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected date range: {}", e);
                Err(e)
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.state.theme == theme {
            return;
        }
        tracing::debug!("Switching theme to {}", theme.as_str());
        self.state.theme = theme;
        // Theme changes rebuild the whole chart, like a fresh load
        self.rebuild_series();
        self.render_chart();
        self.refresh();
    }

    /// Pan/zoom completion: adopt whatever window the surface now shows
    /// and recompute the derived state against it.
    pub fn view_window_changed(&mut self) {
        let Some(window) = self.surface.visible_window() else {
            tracing::warn!("View change reported before the surface had a window");
            return;
        };
        self.state.active_preset = None;
        self.state.window = window;
        self.refresh();
    }

    /// Create a group, write the full list through to storage, and plot
    /// its averaged series. Validation failures mutate nothing.
    pub fn create_group(
        &mut self,
        name: &str,
        sensors: Vec<String>,
        icon: &str,
        color: &str,
    ) -> DashboardResult<String> {
        let id = Group::unique_id(&self.state.groups, Utc::now().timestamp_millis());
        let group = Group::validated(
            id,
            name.to_string(),
            sensors,
            icon.to_string(),
            color.to_string(),
        )?;
        let group_id = group.id.clone();

        self.state.groups.push(group);
        if let Err(e) = self.group_store.save(&self.state.groups) {
            self.state.groups.pop();
            return Err(e);
        }
        tracing::info!("Created group {} ({})", name.trim(), group_id);

        self.rebuild_series();
        self.render_chart();
        self.refresh();
        Ok(group_id)
    }

    pub fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::ToggleSensor(name) => {
                self.toggle_sensor(&name);
            }
            DashboardEvent::ToggleGroup(id) => {
                self.toggle_group(&id);
            }
            DashboardEvent::SelectPreset(preset) => self.select_preset(preset),
            DashboardEvent::SetExplicitRange {
                start_date,
                start_time,
                end_date,
                end_time,
            } => {
                let _ = self.set_explicit_range(&start_date, &start_time, &end_date, &end_time);
            }
            DashboardEvent::SetTheme(theme) => self.set_theme(theme),
            DashboardEvent::ViewWindowChanged => self.view_window_changed(),
            DashboardEvent::CreateGroup {
                name,
                sensors,
                icon,
                color,
            } => {
                if let Err(e) = self.create_group(&name, sensors, &icon, &color) {
                    tracing::warn!("Group creation rejected: {}", e);
                }
            }
        }
    }

    /// Drain events until the channel closes. Events run to completion in
    /// arrival order; there is no concurrent recomputation.
    pub async fn run(&mut self, mut events: mpsc::Receiver<DashboardEvent>) {
        while let Some(event) = events.recv().await {
            tracing::debug!("Handling {:?}", event);
            self.handle_event(event);
        }
    }

    // Recompute what depends on the visible-series set and the window:
    // the value axis and the stats panel.
    fn refresh(&mut self) {
        let bounds = value_bounds(&self.state.series, &self.state.visibility, self.state.window);
        self.surface.set_value_bounds(bounds);
        self.state.stats = compute_stats(
            &self.state.series,
            &self.state.visibility,
            self.state.window,
            &self.stats_priority,
        );
    }

    fn apply_window(&mut self, window: TimeWindow) {
        self.state.window = window;
        self.surface.set_time_window(window);
        self.refresh();
    }

    fn rebuild_series(&mut self) {
        let Some(store) = &self.state.store else {
            self.state.series.clear();
            return;
        };
        let mut series = store.series().to_vec();
        for group in &self.state.groups {
            series.push(group.series(store.records(), &self.timestamp_field));
        }
        self.state.series = series;
    }

    fn render_chart(&mut self) {
        let bounds = value_bounds(&self.state.series, &self.state.visibility, self.state.window);
        let series = self
            .state
            .series
            .iter()
            .map(|s| ChartSeries {
                hidden: self.state.visibility.is_hidden(&s.id),
                series: if self.max_points_per_series > 0 {
                    s.downsampled(self.max_points_per_series)
                } else {
                    s.clone()
                },
            })
            .collect();
        self.surface.render(ChartView {
            theme: self.state.theme,
            series,
            window: self.state.window,
            bounds,
        });
    }

    pub fn sensor_series(&self) -> &[Series] {
        self.state
            .store
            .as_ref()
            .map(|store| store.series())
            .unwrap_or_default()
    }

    pub fn groups(&self) -> &[Group] {
        &self.state.groups
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.state.visibility
    }

    pub fn stats(&self) -> &[StatRow] {
        &self.state.stats
    }

    pub fn window(&self) -> TimeWindow {
        self.state.window
    }

    pub fn current_bounds(&self) -> ValueBounds {
        value_bounds(&self.state.series, &self.state.visibility, self.state.window)
    }

    pub fn active_preset(&self) -> Option<RangePreset> {
        self.state.active_preset
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DashboardError;
    use crate::domain::record::FeedRecord;
    use crate::infrastructure::headless::HeadlessSurface;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct StaticFeed(Vec<FeedRecord>);

    #[async_trait]
    impl ReadingsFeed for StaticFeed {
        async fn fetch_records(&self) -> DashboardResult<Vec<FeedRecord>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct MemoryGroups(Mutex<Vec<Group>>);

    impl GroupStore for MemoryGroups {
        fn load(&self) -> Vec<Group> {
            self.0.lock().unwrap().clone()
        }

        fn save(&self, groups: &[Group]) -> DashboardResult<()> {
            *self.0.lock().unwrap() = groups.to_vec();
            Ok(())
        }
    }

    fn feed() -> Arc<StaticFeed> {
        Arc::new(StaticFeed(
            serde_json::from_value(json!([
                {"Heure": "2024-01-01T00:00:00Z", "Paris": "20", "Bureau": "22"},
                {"Heure": "2024-01-01T01:00:00Z", "Paris": "21"},
            ]))
            .unwrap(),
        ))
    }

    fn controller_with_surface() -> (DashboardController, HeadlessSurface) {
        let surface = HeadlessSurface::new();
        let controller = DashboardController::new(
            feed(),
            Arc::new(MemoryGroups::default()),
            Box::new(surface.clone()),
            &DashboardConfig::default(),
        );
        (controller, surface)
    }

    #[tokio::test]
    async fn test_load_renders_and_applies_default_preset() {
        let (mut controller, surface) = controller_with_surface();
        controller.load().await.unwrap();

        assert_eq!(controller.sensor_series().len(), 2);
        assert_eq!(controller.active_preset(), Some(RangePreset::SixHours));
        let window = controller.window();
        assert_eq!(window.end_ms - window.start_ms, 6 * 3600 * 1000);

        let rendered = surface.last_view().unwrap();
        assert_eq!(rendered.series.len(), 2);
        assert_eq!(surface.window(), Some(window));
    }

    #[tokio::test]
    async fn test_double_toggle_restores_visibility() {
        let (mut controller, surface) = controller_with_surface();
        controller.load().await.unwrap();

        assert!(controller.toggle_sensor("Paris"));
        assert!(controller.visibility().is_hidden("Paris"));
        assert_eq!(surface.hidden_flag("Paris"), Some(true));

        assert!(!controller.toggle_sensor("Paris"));
        assert!(!controller.visibility().is_hidden("Paris"));
        assert_eq!(surface.hidden_flag("Paris"), Some(false));
    }

    #[tokio::test]
    async fn test_rejected_range_keeps_window_and_bounds() {
        let (mut controller, surface) = controller_with_surface();
        controller.load().await.unwrap();

        let before_window = controller.window();
        let before_bounds = surface.bounds();

        let result = controller.set_explicit_range("", "00:00", "2024-01-02", "12:00");
        assert!(matches!(result, Err(DashboardError::InvalidRange(_))));
        assert_eq!(controller.window(), before_window);
        assert_eq!(surface.bounds(), before_bounds);
        assert_eq!(surface.window(), Some(before_window));
    }

    #[tokio::test]
    async fn test_create_group_persists_and_plots() {
        let groups = Arc::new(MemoryGroups::default());
        let surface = HeadlessSurface::new();
        let mut controller = DashboardController::new(
            feed(),
            groups.clone(),
            Box::new(surface.clone()),
            &DashboardConfig::default(),
        );
        controller.load().await.unwrap();

        let id = controller
            .create_group("Maison", vec!["Paris".into(), "Bureau".into()], "fa-home", "#fff")
            .unwrap();

        assert_eq!(controller.groups().len(), 1);
        assert_eq!(groups.load().len(), 1);
        let view = surface.last_view().unwrap();
        assert_eq!(view.series.len(), 3);
        let plotted = view.series.iter().find(|s| s.series.id == id).unwrap();
        assert_eq!(plotted.series.points[0].value, 21.0);

        let rejected = controller.create_group("  ", vec!["Paris".into()], "fa-home", "#fff");
        assert!(matches!(rejected, Err(DashboardError::InvalidGroup(_))));
        assert_eq!(controller.groups().len(), 1);
    }

    #[tokio::test]
    async fn test_event_loop_applies_events_in_order() {
        let (mut controller, surface) = controller_with_surface();
        controller.load().await.unwrap();

        let (tx, rx) = mpsc::channel(8);
        tx.send(DashboardEvent::ToggleSensor("Bureau".into()))
            .await
            .unwrap();
        tx.send(DashboardEvent::SelectPreset(RangePreset::Day))
            .await
            .unwrap();
        drop(tx);
        controller.run(rx).await;

        assert!(controller.visibility().is_hidden("Bureau"));
        assert_eq!(controller.active_preset(), Some(RangePreset::Day));
        let window = controller.window();
        assert_eq!(window.end_ms - window.start_ms, 24 * 3600 * 1000);
        assert_eq!(surface.hidden_flag("Bureau"), Some(true));
    }

    #[tokio::test]
    async fn test_pan_zoom_adopts_surface_window() {
        let (mut controller, surface) = controller_with_surface();
        controller.load().await.unwrap();

        let panned = TimeWindow::new(1_704_067_200_000, 1_704_070_800_000);
        surface.simulate_pan_zoom(panned);
        controller.view_window_changed();

        assert_eq!(controller.window(), panned);
        assert_eq!(controller.active_preset(), None);
        // Both feed points sit inside the panned window
        let bounds = surface.bounds().unwrap();
        assert_eq!(bounds.min, 18.0);
        assert_eq!(bounds.max, 24.0);
    }
}
