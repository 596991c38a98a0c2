//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod chart_port;
mod emission_port;
mod geocoding_port;
mod routing_port;
mod trip_history_port;

#[cfg(test)]
pub use chart_port::MockChartPort;
pub use chart_port::ChartPort;
#[cfg(test)]
pub use emission_port::MockEmissionPort;
pub use emission_port::EmissionPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
#[cfg(test)]
pub use trip_history_port::MockTripHistoryPort;
pub use trip_history_port::TripHistoryPort;
