//! Domain layer for Carbon Tracker
//!
//! Contains the trip log model, value objects for locations and units, and
//! domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
