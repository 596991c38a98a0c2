//! Value Objects - Immutable, identity-less domain primitives

mod co2_mass;
mod distance;
mod geo_location;
mod place_name;

pub use co2_mass::Co2Mass;
pub use distance::Distance;
pub use geo_location::GeoLocation;
pub use place_name::PlaceName;
