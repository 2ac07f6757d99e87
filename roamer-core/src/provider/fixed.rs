use std::collections::HashSet;

use crate::{EdgeProvider, EdgeProviderError, EstimateMode, Place, RouteEdge};

/// Supplier backed by a fixed, in-memory edge list.
///
/// Returns the edges whose endpoints are both among the requested places.
/// The travel mode is not consulted; the dataset carries its own.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StaticEdgeProvider {
    edges: Vec<RouteEdge>,
}

impl StaticEdgeProvider {
    /// Wrap an edge list.
    pub const fn new(edges: Vec<RouteEdge>) -> Self {
        Self { edges }
    }

    /// Every edge in the dataset.
    pub fn edges(&self) -> &[RouteEdge] {
        &self.edges
    }
}

impl From<Vec<RouteEdge>> for StaticEdgeProvider {
    fn from(edges: Vec<RouteEdge>) -> Self {
        Self::new(edges)
    }
}

impl EdgeProvider for StaticEdgeProvider {
    fn route_edges(
        &self,
        places: &[Place],
        _mode: EstimateMode,
    ) -> Result<Vec<RouteEdge>, EdgeProviderError> {
        if places.len() < 2 {
            return Err(EdgeProviderError::EmptyInput);
        }
        let wanted: HashSet<&str> = places.iter().map(|p| p.id.as_str()).collect();
        Ok(self
            .edges
            .iter()
            .filter(|e| wanted.contains(e.from.as_str()) && wanted.contains(e.to.as_str()))
            .cloned()
            .collect())
    }
}
