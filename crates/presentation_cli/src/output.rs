//! Console output

use std::io::{self, Write};

use application::TripEstimate;
use domain::entities::TripHistory;

/// The four result lines of a computed trip
pub fn write_estimate<W: Write>(out: &mut W, estimate: &TripEstimate) -> io::Result<()> {
    writeln!(out, "{} - {}", estimate.start, estimate.start_location)?;
    writeln!(out, "{} - {}", estimate.end, estimate.end_location)?;
    writeln!(
        out,
        "Distance from {} to {}: {}",
        estimate.start, estimate.end, estimate.distance
    )?;
    writeln!(out, "Estimated CO2 emissions for the trip: {}", estimate.co2)
}

/// One line per recorded trip followed by the totals
pub fn write_history<W: Write>(out: &mut W, history: &TripHistory) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "No trips recorded yet.");
    }

    for record in history.records() {
        writeln!(
            out,
            "{}  {} -> {}  {:.1} km  {:.0} kg",
            record.formatted_date(),
            record.start_city(),
            record.end_city(),
            record.distance_km(),
            record.co2_kg()
        )?;
    }

    writeln!(
        out,
        "Total: {} trips, {:.1} km, {:.0} kg CO2",
        history.len(),
        history.total_distance_km(),
        history.total_co2_kg()
    )
}
