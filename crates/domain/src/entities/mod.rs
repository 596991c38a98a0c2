//! Domain entities - the trip log and its records

mod trip_history;
mod trip_record;

pub use trip_history::TripHistory;
pub use trip_record::{TRIP_DATE_FORMAT, TripRecord};
