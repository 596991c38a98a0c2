//! Routing port
//!
//! Computes driving distances between coordinates.

use async_trait::async_trait;
use domain::value_objects::{Distance, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving route computation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Driving distance of the preferred route from `origin` to `destination`
    ///
    /// Fails with `ApplicationError::RouteNotFound` when the service has no route.
    async fn route_distance(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<Distance, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn RoutingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RoutingPort>();
    }
}
