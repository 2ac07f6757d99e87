//! Builders and stub collaborators shared by unit and behaviour tests.

use chrono::NaiveDate;
use geo::Coord;

use crate::{
    Algorithm, EdgeProvider, EdgeProviderError, EstimateMode, NewItinerary, Place, Route,
    RouteEdge,
};

/// Construct an attraction named after its id.
pub fn place(id: &str, lon: f64, lat: f64) -> Place {
    Place::new(id, id.to_uppercase(), Coord { x: lon, y: lat })
}

/// Both directions of a leg with identical weights.
pub fn symmetric(a: &str, b: &str, distance: f64, duration: f64) -> [RouteEdge; 2] {
    let there = RouteEdge::new(a, b, distance, duration);
    let back = there.reversed();
    [there, back]
}

/// A valid two-stop route from `a` to `b`.
pub fn two_stop_route() -> Route {
    let places = vec![place("a", 2.2945, 48.8584), place("b", 2.3376, 48.8606)];
    let edges = vec![RouteEdge::new("a", "b", 4.5, 25.0)];
    match Route::from_path(places, edges, Algorithm::Ucs) {
        Ok(route) => route,
        Err(err) => panic!("fixture route is well formed: {err}"),
    }
}

/// An itinerary draft for [`two_stop_route`] dated 1 June 2024.
pub fn draft(name: &str) -> NewItinerary {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
    NewItinerary::new(name, date, two_stop_route()).with_description("test itinerary")
}

/// Supplier that always fails with the configured error.
#[derive(Debug, Clone)]
pub struct FailingEdgeProvider {
    error: EdgeProviderError,
}

impl FailingEdgeProvider {
    /// Fail every request with `error`.
    pub const fn new(error: EdgeProviderError) -> Self {
        Self { error }
    }
}

impl Default for FailingEdgeProvider {
    fn default() -> Self {
        Self::new(EdgeProviderError::NetworkError {
            url: "http://routing.invalid".into(),
            message: "connection refused".into(),
        })
    }
}

impl EdgeProvider for FailingEdgeProvider {
    fn route_edges(
        &self,
        _places: &[Place],
        _mode: EstimateMode,
    ) -> Result<Vec<RouteEdge>, EdgeProviderError> {
        Err(self.error.clone())
    }
}
