//! Climatiq integration for Carbon Tracker
//!
//! Client for the [Climatiq](https://www.climatiq.io) estimate endpoint,
//! used to turn a driven distance into an estimated CO2e mass.

mod client;
mod config;
mod error;
mod models;

pub use client::{ClimatiqClient, EmissionClient};
pub use config::ClimatiqConfig;
pub use error::ClimatiqError;
pub use models::EmissionEstimate;
