//! A single logged journey

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Co2Mass, Distance, PlaceName};

/// Timestamp format used for the `date` column of the history log
pub const TRIP_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded trip with its computed distance and emissions
///
/// Field order matches the column order of the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    start_city: String,
    end_city: String,
    distance_km: f64,
    co2_kg: f64,
    #[serde(with = "trip_date")]
    date: NaiveDateTime,
}

impl TripRecord {
    /// Create a record from raw column values
    ///
    /// Sub-second precision is dropped from `date` so the record survives a
    /// save/load cycle unchanged.
    #[must_use]
    pub fn new(
        start_city: impl Into<String>,
        end_city: impl Into<String>,
        distance_km: f64,
        co2_kg: f64,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            start_city: start_city.into(),
            end_city: end_city.into(),
            distance_km,
            co2_kg,
            date: date.with_nanosecond(0).unwrap_or(date),
        }
    }

    /// Create a record for a computed trip, stamped at `date`
    #[must_use]
    pub fn for_trip(
        start: &PlaceName,
        end: &PlaceName,
        distance: Distance,
        co2: Co2Mass,
        date: NaiveDateTime,
    ) -> Self {
        Self::new(
            start.as_str(),
            end.as_str(),
            distance.kilometers(),
            co2.kilograms(),
            date,
        )
    }

    /// Create a record for a computed trip, stamped with the local time
    #[must_use]
    pub fn now(start: &PlaceName, end: &PlaceName, distance: Distance, co2: Co2Mass) -> Self {
        Self::for_trip(start, end, distance, co2, Local::now().naive_local())
    }

    /// Name of the starting place
    #[must_use]
    pub fn start_city(&self) -> &str {
        &self.start_city
    }

    /// Name of the destination
    #[must_use]
    pub fn end_city(&self) -> &str {
        &self.end_city
    }

    /// Driving distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Estimated CO2-equivalent emissions in kilograms
    #[must_use]
    pub const fn co2_kg(&self) -> f64 {
        self.co2_kg
    }

    /// When the trip was recorded (local time)
    #[must_use]
    pub const fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// The `date` column as written to the log
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.format(TRIP_DATE_FORMAT).to_string()
    }
}

mod trip_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::TRIP_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(TRIP_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TRIP_DATE_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn for_trip_stores_kilometers_and_kilograms() {
        let record = TripRecord::for_trip(
            &PlaceName::new("New York").unwrap(),
            &PlaceName::new("Boston").unwrap(),
            Distance::from_meters(350_000.0).unwrap(),
            Co2Mass::from_grams(45_500.0).unwrap(),
            sample_date(),
        );
        assert_eq!(record.start_city(), "New York");
        assert_eq!(record.end_city(), "Boston");
        assert_eq!(record.distance_km(), 350.0);
        assert_eq!(record.co2_kg(), 45.5);
    }

    #[test]
    fn sub_second_precision_is_dropped() {
        let date = sample_date().with_nanosecond(123_456_789).unwrap();
        let record = TripRecord::new("A", "B", 1.0, 1.0, date);
        assert_eq!(record.date(), sample_date());
    }

    #[test]
    fn date_uses_log_format() {
        let record = TripRecord::new("A", "B", 1.0, 1.0, sample_date());
        assert_eq!(record.formatted_date(), "2024-01-15 10:30:00");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-01-15 10:30:00");
    }

    #[test]
    fn date_parse_rejects_garbage() {
        let json = r#"{"start_city":"A","end_city":"B","distance_km":1.0,"co2_kg":1.0,"date":"yesterday"}"#;
        assert!(serde_json::from_str::<TripRecord>(json).is_err());
    }
}
