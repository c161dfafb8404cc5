// Port for the chart surface collaborator
use crate::domain::scale::ValueBounds;
use crate::domain::series::Series;
use crate::domain::style::Theme;
use crate::domain::window::TimeWindow;

/// One plotted series with its current visibility flag.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub series: Series,
    pub hidden: bool,
}

/// Everything the surface needs for a full redraw.
#[derive(Debug, Clone)]
pub struct ChartView {
    pub theme: Theme,
    pub series: Vec<ChartSeries>,
    pub window: TimeWindow,
    pub bounds: ValueBounds,
}

/// The rendering collaborator. Incremental mutations keep the drawn chart
/// in step between full redraws; `visible_window` reads back the span the
/// user panned or zoomed to.
pub trait ChartSurface: Send {
    fn render(&mut self, view: ChartView);

    fn set_series_hidden(&mut self, id: &str, hidden: bool);

    fn set_time_window(&mut self, window: TimeWindow);

    fn set_value_bounds(&mut self, bounds: ValueBounds);

    fn visible_window(&self) -> Option<TimeWindow>;
}
