//! Adapters implementing application ports on top of the integration clients

mod emission_adapter;
mod geocoding_adapter;
mod routing_adapter;

pub use emission_adapter::EmissionAdapter;
pub use geocoding_adapter::GeocodingAdapter;
pub use routing_adapter::RoutingAdapter;
