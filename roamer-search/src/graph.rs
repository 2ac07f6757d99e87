//! Owned, index-based snapshot of the places and edges a search runs over.
//!
//! Every search builds its own snapshot, so nothing a caller passes in is
//! shared with, or mutated by, the traversal.

use std::collections::HashMap;

use roamer_core::{Algorithm, Place, Route, RouteEdge};

/// An edge with both endpoints resolved to place indices.
#[derive(Debug, Clone)]
pub(crate) struct IndexedEdge {
    pub(crate) to: usize,
    pub(crate) edge: RouteEdge,
}

/// Places and the directed edges between them, addressed by index.
#[derive(Debug, Clone)]
pub(crate) struct SearchGraph {
    places: Vec<Place>,
    index: HashMap<String, usize>,
    edges: Vec<IndexedEdge>,
    outgoing: Vec<Vec<usize>>,
}

impl SearchGraph {
    /// Snapshot `places` and `edges`.
    ///
    /// Later places reusing an earlier id are dropped. Edges are kept in
    /// input order, except self loops and edges touching unknown places.
    pub(crate) fn new(places: &[Place], edges: &[RouteEdge]) -> Self {
        let mut index = HashMap::with_capacity(places.len());
        let mut kept = Vec::with_capacity(places.len());
        for place in places {
            if index.contains_key(&place.id) {
                log::warn!("ignoring duplicate place id '{}'", place.id);
                continue;
            }
            index.insert(place.id.clone(), kept.len());
            kept.push(place.clone());
        }

        let mut graph_edges = Vec::with_capacity(edges.len());
        let mut outgoing = vec![Vec::new(); kept.len()];
        for edge in edges {
            let (Some(&from), Some(&to)) = (index.get(&edge.from), index.get(&edge.to)) else {
                continue;
            };
            if from == to {
                continue;
            }
            if let Some(list) = outgoing.get_mut(from) {
                list.push(graph_edges.len());
                graph_edges.push(IndexedEdge {
                    to,
                    edge: edge.clone(),
                });
            }
        }

        Self {
            places: kept,
            index,
            edges: graph_edges,
            outgoing,
        }
    }

    /// Number of distinct places.
    pub(crate) const fn len(&self) -> usize {
        self.places.len()
    }

    /// Number of edges retained for the search.
    pub(crate) const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Index of the place with `id`.
    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Edge with index `edge`.
    pub(crate) fn edge(&self, edge: usize) -> Option<&IndexedEdge> {
        self.edges.get(edge)
    }

    /// Indices of edges leaving `place`, in input order.
    pub(crate) fn outgoing(&self, place: usize) -> &[usize] {
        self.outgoing.get(place).map(Vec::as_slice).unwrap_or_default()
    }

    /// Materialise a route from place and edge indices.
    ///
    /// Returns `None` if an index is out of range or the path does not form
    /// a valid route, which the searches never produce.
    pub(crate) fn route(&self, path: &[usize], edges: &[usize], algorithm: Algorithm) -> Option<Route> {
        let places = path
            .iter()
            .map(|&i| self.places.get(i).cloned())
            .collect::<Option<Vec<_>>>()?;
        let legs = edges
            .iter()
            .map(|&e| self.edges.get(e).map(|indexed| indexed.edge.clone()))
            .collect::<Option<Vec<_>>>()?;
        Route::from_path(places, legs, algorithm)
            .inspect_err(|err| log::error!("search produced an invalid {algorithm} route: {err}"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roamer_core::test_support::place;

    #[test]
    fn drops_duplicates_self_loops_and_dangling_edges() {
        let places = [place("a", 0.0, 0.0), place("b", 0.0, 1.0), place("a", 5.0, 5.0)];
        let edges = [
            RouteEdge::new("a", "b", 1.0, 1.0),
            RouteEdge::new("a", "a", 0.0, 0.0),
            RouteEdge::new("b", "ghost", 1.0, 1.0),
            RouteEdge::new("b", "a", 2.0, 2.0),
        ];
        let graph = SearchGraph::new(&places, &edges);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.index_of("b"), Some(1));
        assert_eq!(graph.outgoing(0), &[0]);
        assert_eq!(graph.outgoing(1), &[1]);
        assert!(graph.outgoing(7).is_empty());
    }

    #[test]
    fn route_uses_the_first_copy_of_a_duplicated_place() {
        let places = [place("a", 0.0, 0.0), place("a", 9.0, 9.0), place("b", 1.0, 1.0)];
        let graph = SearchGraph::new(&places, &[RouteEdge::new("a", "b", 1.0, 2.0)]);
        let route = graph.route(&[0, 1], &[0], Algorithm::Dfs).expect("valid route");
        assert_eq!(route.places[0].location.x, 0.0);
    }
}
