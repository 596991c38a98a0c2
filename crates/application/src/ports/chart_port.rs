//! Chart rendering port

use async_trait::async_trait;
use domain::TripHistory;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for rendering the distance vs. CO2 chart
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChartPort: Send + Sync {
    /// Render the whole history, replacing any previous chart
    async fn render(&self, history: &TripHistory) -> Result<(), ApplicationError>;

    /// Human-readable location of the rendered chart
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ChartPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ChartPort>();
    }
}
