//! The ordered log of recorded trips

use serde::{Deserialize, Serialize};

use super::TripRecord;

/// Ordered sequence of trip records; insertion order is chronological order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripHistory {
    records: Vec<TripRecord>,
}

impl TripHistory {
    /// Column names of the history log, in order
    pub const COLUMNS: [&'static str; 5] =
        ["start_city", "end_city", "distance_km", "co2_kg", "date"];

    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a history from records already in chronological order
    #[must_use]
    pub const fn from_records(records: Vec<TripRecord>) -> Self {
        Self { records }
    }

    /// Column names of the log
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        &Self::COLUMNS
    }

    /// Add a record after all existing ones
    pub fn append(&mut self, record: TripRecord) {
        self.records.push(record);
    }

    /// All records in insertion order
    #[must_use]
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Most recently appended record
    #[must_use]
    pub fn last(&self) -> Option<&TripRecord> {
        self.records.last()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all trip distances in kilometers
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.records.iter().map(TripRecord::distance_km).sum()
    }

    /// Sum of all trip emissions in kilograms
    #[must_use]
    pub fn total_co2_kg(&self) -> f64 {
        self.records.iter().map(TripRecord::co2_kg).sum()
    }

    /// `(distance_km, co2_kg)` of each record, in insertion order
    #[must_use]
    pub fn per_trip_points(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|r| (r.distance_km(), r.co2_kg()))
            .collect()
    }

    /// Running totals of `(distance_km, co2_kg)`, in insertion order
    #[must_use]
    pub fn cumulative_points(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .scan((0.0, 0.0), |(distance, co2), r| {
                *distance += r.distance_km();
                *co2 += r.co2_kg();
                Some((*distance, *co2))
            })
            .collect()
    }
}

impl IntoIterator for TripHistory {
    type Item = TripRecord;
    type IntoIter = std::vec::IntoIter<TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl FromIterator<TripRecord> for TripHistory {
    fn from_iter<I: IntoIterator<Item = TripRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
