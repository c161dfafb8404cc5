// Time windows and range presets
use crate::domain::errors::{DashboardError, DashboardResult};
use crate::domain::record::parse_instant_ms;
use chrono::{DateTime, Duration, Months, Utc};

/// The displayed span of the time axis, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeWindow {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    pub fn contains(&self, time_ms: i64) -> bool {
        self.start_ms <= time_ms && time_ms <= self.end_ms
    }

    /// Combine explicit `YYYY-MM-DD` + `HH:MM[:SS]` inputs into a window.
    /// Unparseable or inverted input is rejected; the caller keeps its
    /// previous window, nothing is clamped.
    pub fn from_inputs(
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> DashboardResult<Self> {
        let start_ms = combine_inputs(start_date, start_time).ok_or_else(|| {
            DashboardError::InvalidRange(format!("bad start '{start_date} {start_time}'"))
        })?;
        let end_ms = combine_inputs(end_date, end_time).ok_or_else(|| {
            DashboardError::InvalidRange(format!("bad end '{end_date} {end_time}'"))
        })?;
        if start_ms > end_ms {
            return Err(DashboardError::InvalidRange(
                "start is after end".to_string(),
            ));
        }
        Ok(Self { start_ms, end_ms })
    }
}

fn combine_inputs(date: &str, time: &str) -> Option<i64> {
    parse_instant_ms(&format!("{}T{}", date.trim(), time.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    TwoHours,
    SixHours,
    Day,
    Week,
    Month,
    Year,
}

impl RangePreset {
    pub const ALL: [RangePreset; 6] = [
        RangePreset::TwoHours,
        RangePreset::SixHours,
        RangePreset::Day,
        RangePreset::Week,
        RangePreset::Month,
        RangePreset::Year,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::TwoHours => "2h",
            Self::SixHours => "6h",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.token() == token)
    }

    /// Window reaching back from `end`. Hour and day presets subtract fixed
    /// durations; month and year subtract calendar months, so the length in
    /// days varies with the calendar.
    pub fn window_ending_at(&self, end: DateTime<Utc>) -> TimeWindow {
        let start = match self {
            Self::TwoHours => end - Duration::hours(2),
            Self::SixHours => end - Duration::hours(6),
            Self::Day => end - Duration::hours(24),
            Self::Week => end - Duration::hours(7 * 24),
            Self::Month => end - Months::new(1),
            Self::Year => end - Months::new(12),
        };
        TimeWindow::new(start.timestamp_millis(), end.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    #[test]
    fn test_fixed_presets_subtract_exact_durations() {
        let now = instant("2024-03-15T12:00:00Z");
        let window = RangePreset::SixHours.window_ending_at(now);
        assert_eq!(window.end_ms, now.timestamp_millis());
        assert_eq!(window.end_ms - window.start_ms, 6 * 3600 * 1000);

        let day = RangePreset::Day.window_ending_at(now);
        assert_eq!(day.end_ms - day.start_ms, 24 * 3600 * 1000);

        let week = RangePreset::Week.window_ending_at(now);
        assert_eq!(week.end_ms - week.start_ms, 7 * 24 * 3600 * 1000);
    }

    #[test]
    fn test_month_preset_is_calendar_aware() {
        let window = RangePreset::Month.window_ending_at(instant("2024-03-15T12:00:00Z"));
        assert_eq!(
            window.start_ms,
            instant("2024-02-15T12:00:00Z").timestamp_millis()
        );

        // Short target months clamp to their last day
        let clamped = RangePreset::Month.window_ending_at(instant("2024-03-31T12:00:00Z"));
        assert_eq!(
            clamped.start_ms,
            instant("2024-02-29T12:00:00Z").timestamp_millis()
        );

        let year = RangePreset::Year.window_ending_at(instant("2024-03-15T12:00:00Z"));
        assert_eq!(
            year.start_ms,
            instant("2023-03-15T12:00:00Z").timestamp_millis()
        );
    }

    #[test]
    fn test_token_round_trip() {
        assert_eq!(RangePreset::from_token("6h"), Some(RangePreset::SixHours));
        assert_eq!(RangePreset::from_token("month"), Some(RangePreset::Month));
        assert_eq!(RangePreset::from_token("3d"), None);
    }

    #[test]
    fn test_explicit_inputs() {
        let window =
            TimeWindow::from_inputs("2024-01-01", "00:00", "2024-01-02", "12:30").unwrap();
        assert_eq!(window.start_ms, 1_704_067_200_000);
        assert_eq!(
            window.end_ms,
            1_704_067_200_000 + (36 * 3600 + 1800) * 1000
        );
        assert!(window.contains(window.start_ms));
        assert!(window.contains(window.end_ms));
        assert!(!window.contains(window.end_ms + 1));
    }

    #[test]
    fn test_explicit_inputs_rejected() {
        assert!(matches!(
            TimeWindow::from_inputs("", "00:00", "2024-01-02", "12:30"),
            Err(DashboardError::InvalidRange(_))
        ));
        assert!(matches!(
            TimeWindow::from_inputs("2024-01-01", "25:99", "2024-01-02", "12:30"),
            Err(DashboardError::InvalidRange(_))
        ));
        assert!(matches!(
            TimeWindow::from_inputs("2024-01-03", "00:00", "2024-01-02", "12:30"),
            Err(DashboardError::InvalidRange(_))
        ));
    }
}
