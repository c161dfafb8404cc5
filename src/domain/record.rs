// Raw feed records and reading/timestamp parsing
use serde::Deserialize;
use serde_json::Value;

/// One row of the feed: a flat JSON object mapping sensor names to
/// readings, plus a single timestamp field.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct FeedRecord(serde_json::Map<String, Value>);

impl FeedRecord {
    /// The record's instant in epoch milliseconds, or `None` when the
    /// timestamp field is missing or unparseable.
    pub fn timestamp_ms(&self, timestamp_field: &str) -> Option<i64> {
        match self.0.get(timestamp_field)? {
            Value::String(s) => parse_instant_ms(s),
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// The reading for `sensor` as a finite float. Readings arrive as JSON
    /// numbers or numeric strings; anything else is `None`.
    pub fn value(&self, sensor: &str) -> Option<f64> {
        let value = match self.0.get(sensor)? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Field names other than the timestamp field.
    pub fn sensor_names(&self, timestamp_field: &str) -> Vec<String> {
        self.0
            .keys()
            .filter(|key| key.as_str() != timestamp_field)
            .cloned()
            .collect()
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an instant to epoch milliseconds. Accepts RFC 3339 and the common
/// naive layouts above; naive inputs are read as UTC.
pub fn parse_instant_ms(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(instant) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(instant.timestamp_millis());
    }
    NAIVE_FORMATS.iter().find_map(|format| {
        chrono::NaiveDateTime::parse_from_str(raw, format)
            .ok()
            .map(|naive| naive.and_utc().timestamp_millis())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> FeedRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_timestamp_formats() {
        let rfc3339 = record(json!({"Heure": "2024-01-01T00:00:00Z"}));
        assert_eq!(rfc3339.timestamp_ms("Heure"), Some(1_704_067_200_000));

        let naive = record(json!({"Heure": "2024-01-01T00:00:00"}));
        assert_eq!(naive.timestamp_ms("Heure"), Some(1_704_067_200_000));

        let no_seconds = record(json!({"Heure": "2024-01-01 00:00"}));
        assert_eq!(no_seconds.timestamp_ms("Heure"), Some(1_704_067_200_000));

        let epoch = record(json!({"Heure": 1_704_067_200_000i64}));
        assert_eq!(epoch.timestamp_ms("Heure"), Some(1_704_067_200_000));

        let garbage = record(json!({"Heure": "yesterday"}));
        assert_eq!(garbage.timestamp_ms("Heure"), None);

        let missing = record(json!({"Paris": "20"}));
        assert_eq!(missing.timestamp_ms("Heure"), None);
    }

    #[test]
    fn test_value_parsing() {
        let row = record(json!({
            "Heure": "2024-01-01T00:00:00Z",
            "Paris": "20.5",
            "Bureau": 21,
            "Chambre": " 19.25 ",
            "SdB": "offline",
            "Cave": "NaN",
        }));

        assert_eq!(row.value("Paris"), Some(20.5));
        assert_eq!(row.value("Bureau"), Some(21.0));
        assert_eq!(row.value("Chambre"), Some(19.25));
        assert_eq!(row.value("SdB"), None);
        assert_eq!(row.value("Cave"), None);
        assert_eq!(row.value("Grenier"), None);
    }

    #[test]
    fn test_sensor_names_exclude_timestamp_field() {
        let row = record(json!({"Heure": "2024-01-01T00:00:00Z", "Paris": "20", "Bureau": "21"}));
        let names = row.sensor_names("Heure");
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Paris".to_string()));
        assert!(names.contains(&"Bureau".to_string()));
    }
}
