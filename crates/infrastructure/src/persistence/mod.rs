//! Persistence layer
//!
//! File-backed storage for the trip history log.

mod csv_history_store;

pub use csv_history_store::CsvTripHistoryStore;
