//! Trip history storage port
//!
//! The history log is loaded fully, appended to in memory and saved fully.

use async_trait::async_trait;
use domain::TripHistory;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting the trip history log
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TripHistoryPort: Send + Sync {
    /// Load the full log; a missing log is an empty history, not an error
    async fn load(&self) -> Result<TripHistory, ApplicationError>;

    /// Persist the full log, replacing any previous content
    async fn save(&self, history: &TripHistory) -> Result<(), ApplicationError>;

    /// Human-readable location of the log (e.g. a file path)
    fn location(&self) -> String;
}
