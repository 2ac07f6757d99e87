use crate::edges::generate_edges;
use crate::{EdgeProvider, EdgeProviderError, EstimateMode, Place, RouteEdge};

/// Supplier that derives every edge from great-circle distance.
///
/// Always connects every ordered pair, so it is the fallback when other
/// suppliers fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct EstimatedEdgeProvider;

impl EdgeProvider for EstimatedEdgeProvider {
    fn route_edges(
        &self,
        places: &[Place],
        mode: EstimateMode,
    ) -> Result<Vec<RouteEdge>, EdgeProviderError> {
        if places.len() < 2 {
            return Err(EdgeProviderError::EmptyInput);
        }
        Ok(generate_edges(places, mode))
    }
}
