//! Application services - use case orchestration

mod history_service;
mod trip_service;

pub use history_service::HistoryService;
pub use trip_service::{TripEstimate, TripRequest, TripService, TripStage, TripSummary};
