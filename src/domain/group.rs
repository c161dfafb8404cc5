// Sensor groups and their synthetic averaged series
use crate::domain::errors::{DashboardError, DashboardResult};
use crate::domain::record::FeedRecord;
use crate::domain::series::{Series, SeriesPoint};
use serde::{Deserialize, Serialize};

/// A user-defined named collection of sensors, persisted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub sensors: Vec<String>,
    pub icon: String,
    pub color: String,
}

impl Group {
    /// Validated constructor: the trimmed name and the sensor list must be
    /// non-empty.
    pub fn validated(
        id: String,
        name: String,
        sensors: Vec<String>,
        icon: String,
        color: String,
    ) -> DashboardResult<Self> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DashboardError::InvalidGroup("name is empty".to_string()));
        }
        if sensors.is_empty() {
            return Err(DashboardError::InvalidGroup(format!(
                "group '{name}' has no sensors"
            )));
        }
        Ok(Self {
            id,
            name,
            sensors,
            icon,
            color,
        })
    }

    /// Creation-time id: epoch milliseconds as a string, bumped past any
    /// collision with an already-loaded group.
    pub fn unique_id(existing: &[Group], now_ms: i64) -> String {
        let mut candidate = now_ms;
        while existing.iter().any(|g| g.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Derive this group's synthetic series: at each record's timestamp,
    /// the mean of the member readings present in that record, rounded to
    /// two decimals. Records where no member reports emit no point.
    pub fn series(&self, records: &[FeedRecord], timestamp_field: &str) -> Series {
        let points = records
            .iter()
            .filter_map(|record| {
                let time_ms = record.timestamp_ms(timestamp_field)?;
                let values: Vec<f64> = self
                    .sensors
                    .iter()
                    .filter_map(|sensor| record.value(sensor))
                    .collect();
                if values.is_empty() {
                    return None;
                }
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                Some(SeriesPoint::new(time_ms, round2(mean)))
            })
            .collect();

        Series::new(
            self.id.clone(),
            self.name.clone(),
            self.color.clone(),
            points,
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
