//! Advisory request, weather, and report models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel substituted for weather fields the provider omitted
pub const NOT_AVAILABLE: &str = "N/A";

/// Inbound advisory request body
///
/// Every field is optional at the wire level; presence rules are enforced by
/// the validator, not the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    pub token: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub requester_name: Option<String>,
}

/// Weather readings for one location/date pair
///
/// Fields hold the provider's raw JSON values so numeric readings and the
/// "N/A" sentinel can coexist without conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temp_c: Value,
    pub wind_kph: Value,
    pub pressure_mb: Value,
    pub humidity: Value,
    pub cloudcover: Value,
    pub conditions: Value,
    pub precip: Value,
}

impl WeatherSnapshot {
    /// Build a snapshot from one day entry of a provider response.
    pub fn from_day(day: &Value) -> Self {
        Self {
            temp_c: field_or_not_available(day, "temp"),
            wind_kph: field_or_not_available(day, "windspeed"),
            pressure_mb: field_or_not_available(day, "pressure"),
            humidity: field_or_not_available(day, "humidity"),
            cloudcover: field_or_not_available(day, "cloudcover"),
            conditions: field_or_not_available(day, "conditions"),
            precip: field_or_not_available(day, "precip"),
        }
    }
}

/// Copy a provider field verbatim, substituting the sentinel when absent.
pub fn field_or_not_available(day: &Value, field: &str) -> Value {
    day.get(field)
        .cloned()
        .unwrap_or_else(|| Value::String(NOT_AVAILABLE.to_string()))
}

/// Render a snapshot value for embedding in prose: strings (including the
/// sentinel) render bare, everything else as JSON.
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Combined response returned to the requester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub requester_name: String,
    pub location: String,
    pub date: String,
    pub weather: WeatherSnapshot,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_from_day_copies_fields_verbatim() {
        let day = json!({
            "temp": 21.4,
            "windspeed": 14.0,
            "pressure": 1012.3,
            "humidity": 66.1,
            "cloudcover": 40.2,
            "conditions": "Partially cloudy",
            "precip": 0.0,
            "datetime": "2024-05-01",
        });

        let snapshot = WeatherSnapshot::from_day(&day);
        assert_eq!(snapshot.temp_c, json!(21.4));
        assert_eq!(snapshot.wind_kph, json!(14.0));
        assert_eq!(snapshot.pressure_mb, json!(1012.3));
        assert_eq!(snapshot.humidity, json!(66.1));
        assert_eq!(snapshot.cloudcover, json!(40.2));
        assert_eq!(snapshot.conditions, json!("Partially cloudy"));
        assert_eq!(snapshot.precip, json!(0.0));
    }

    #[test]
    fn test_from_day_defaults_missing_fields() {
        let day = json!({ "temp": 18.0 });

        let snapshot = WeatherSnapshot::from_day(&day);
        assert_eq!(snapshot.temp_c, json!(18.0));
        assert_eq!(snapshot.wind_kph, json!(NOT_AVAILABLE));
        assert_eq!(snapshot.pressure_mb, json!(NOT_AVAILABLE));
        assert_eq!(snapshot.humidity, json!(NOT_AVAILABLE));
        assert_eq!(snapshot.cloudcover, json!(NOT_AVAILABLE));
        assert_eq!(snapshot.conditions, json!(NOT_AVAILABLE));
        assert_eq!(snapshot.precip, json!(NOT_AVAILABLE));
    }

    #[test]
    fn test_value_as_text_renders_strings_bare() {
        assert_eq!(value_as_text(&json!("Rain")), "Rain");
        assert_eq!(value_as_text(&json!(NOT_AVAILABLE)), "N/A");
        assert_eq!(value_as_text(&json!(12.5)), "12.5");
        assert_eq!(value_as_text(&json!(66)), "66");
    }

    /// Provider field names in the order of the snapshot's own fields.
    const PROVIDER_FIELDS: [&str; 7] = [
        "temp",
        "windspeed",
        "pressure",
        "humidity",
        "cloudcover",
        "conditions",
        "precip",
    ];

    fn snapshot_fields(snapshot: &WeatherSnapshot) -> [&Value; 7] {
        [
            &snapshot.temp_c,
            &snapshot.wind_kph,
            &snapshot.pressure_mb,
            &snapshot.humidity,
            &snapshot.cloudcover,
            &snapshot.conditions,
            &snapshot.precip,
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Present fields are copied verbatim and absent fields become the
        /// sentinel, for every subset of provider fields.
        #[test]
        fn prop_extraction_default_policy(present in proptest::collection::vec(any::<bool>(), 7)) {
            let mut day = serde_json::Map::new();
            for (i, field) in PROVIDER_FIELDS.iter().enumerate() {
                if present[i] {
                    day.insert((*field).to_string(), json!(i as f64 + 0.5));
                }
            }

            let snapshot = WeatherSnapshot::from_day(&Value::Object(day));

            for (i, value) in snapshot_fields(&snapshot).iter().enumerate() {
                if present[i] {
                    prop_assert_eq!(*value, &json!(i as f64 + 0.5));
                } else {
                    prop_assert_eq!(*value, &json!(NOT_AVAILABLE));
                }
            }
        }
    }
}
