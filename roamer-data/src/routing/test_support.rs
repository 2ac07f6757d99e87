//! Test utilities for routing providers.
//!
//! [`StubEdgeProvider`] returns canned responses without contacting any
//! routing service.

use roamer_core::{EdgeProvider, EdgeProviderError, EstimateMode, Place, RouteEdge};

/// Stub `EdgeProvider` for testing.
///
/// # Example
///
/// ```
/// use geo::Coord;
/// use roamer_core::{EdgeProvider, EstimateMode, Place, RouteEdge};
/// use roamer_data::routing::test_support::StubEdgeProvider;
///
/// let provider = StubEdgeProvider::with_edges(vec![RouteEdge::new("a", "b", 1.0, 2.0)]);
/// let places = vec![
///     Place::new("a", "A", Coord { x: 0.0, y: 0.0 }),
///     Place::new("b", "B", Coord { x: 1.0, y: 1.0 }),
/// ];
///
/// let edges = provider.route_edges(&places, EstimateMode::Walking);
/// assert_eq!(edges.map(|e| e.len()), Ok(1));
/// ```
#[derive(Debug, Clone)]
pub struct StubEdgeProvider {
    response: StubResponse,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Edges(Vec<RouteEdge>),
    Error(EdgeProviderError),
}

impl StubEdgeProvider {
    /// Create a provider that returns `edges` for any request of two or
    /// more places.
    #[must_use]
    pub const fn with_edges(edges: Vec<RouteEdge>) -> Self {
        Self {
            response: StubResponse::Edges(edges),
        }
    }

    /// Create a provider that fails with `error` for any request of two or
    /// more places.
    #[must_use]
    pub const fn with_error(error: EdgeProviderError) -> Self {
        Self {
            response: StubResponse::Error(error),
        }
    }
}

impl EdgeProvider for StubEdgeProvider {
    fn route_edges(
        &self,
        places: &[Place],
        _mode: EstimateMode,
    ) -> Result<Vec<RouteEdge>, EdgeProviderError> {
        if places.len() < 2 {
            return Err(EdgeProviderError::EmptyInput);
        }

        match &self.response {
            StubResponse::Edges(edges) => Ok(edges.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
