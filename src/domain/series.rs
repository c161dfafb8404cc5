// Time series models and the per-sensor series store
use crate::domain::errors::{DashboardError, DashboardResult};
use crate::domain::record::FeedRecord;
use crate::domain::style::series_color;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub time_ms: i64,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }
}

/// One plotted line. Sensor series use the sensor name as both id and name;
/// group series use the group id, so the two key spaces never collide.
///
/// Points are time-ascending (inherited from feed order) and finite.
#[derive(Debug, Clone)]
pub struct Series {
    pub id: String,
    pub name: String,
    pub color: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(id: String, name: String, color: String, points: Vec<SeriesPoint>) -> Self {
        Self {
            id,
            name,
            color,
            points,
        }
    }

    /// Value of the chronologically last point, regardless of any window.
    pub fn last_value(&self) -> Option<f64> {
        self.points.last().map(|point| point.value)
    }

    /// Copy of this series thinned to at most `max_points` by bucket
    /// averaging; each bucket keeps its middle point's timestamp.
    pub fn downsampled(&self, max_points: usize) -> Series {
        Series::new(
            self.id.clone(),
            self.name.clone(),
            self.color.clone(),
            downsample_points(&self.points, max_points),
        )
    }
}

fn downsample_points(points: &[SeriesPoint], max_points: usize) -> Vec<SeriesPoint> {
    if max_points == 0 || points.len() <= max_points {
        return points.to_vec();
    }

    let bucket_size = (points.len() as f64 / max_points as f64).ceil() as usize;
    let mut downsampled = Vec::with_capacity(max_points);

    for chunk in points.chunks(bucket_size) {
        let mid_idx = chunk.len() / 2;
        let avg_value = chunk.iter().map(|p| p.value).sum::<f64>() / chunk.len() as f64;
        downsampled.push(SeriesPoint::new(chunk[mid_idx].time_ms, avg_value));
    }

    downsampled
}

/// Raw records plus the per-sensor series derived from them. Rebuilt
/// wholesale on every fetch; the records are retained because group series
/// are derived from records, not from other series.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    records: Vec<FeedRecord>,
    series: Vec<Series>,
}

impl SeriesStore {
    /// Build one series per non-timestamp field of the FIRST record; that
    /// first record fixes the sensor set for the whole session. Records
    /// whose timestamp or reading fails to parse contribute no point.
    pub fn build(records: Vec<FeedRecord>, timestamp_field: &str) -> DashboardResult<Self> {
        let first = records.first().ok_or(DashboardError::EmptyDataset)?;
        let sensor_names = first.sensor_names(timestamp_field);
        if sensor_names.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }

        let series = sensor_names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let points = records
                    .iter()
                    .filter_map(|record| {
                        let time_ms = record.timestamp_ms(timestamp_field)?;
                        let value = record.value(&name)?;
                        Some(SeriesPoint::new(time_ms, value))
                    })
                    .collect();
                Series::new(name.clone(), name, series_color(index), points)
            })
            .collect();

        Ok(Self { records, series })
    }

    pub fn records(&self) -> &[FeedRecord] {
        &self.records
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }
}
