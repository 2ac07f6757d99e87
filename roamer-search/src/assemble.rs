//! Choose a strategy for a selection of places and run it.

use std::collections::HashSet;

use roamer_core::{Algorithm, OptimizeFor, Place, Route, RouteEdge};

use crate::strategy::{dfs, dls, ucs};

/// Depth limit used for [`Algorithm::Dls`] when the caller gives none.
pub const DEFAULT_DEPTH_LIMIT: usize = 3;

/// Find a route through `selected`, starting at its first place.
///
/// Edges whose endpoints are not both selected are ignored. `optimize_for`
/// only affects UCS and `depth_limit` only affects DLS. Returns `None` when
/// fewer than two places are selected or no route covers them all.
///
/// # Examples
/// ```
/// use roamer_core::test_support::{place, symmetric};
/// use roamer_core::{Algorithm, OptimizeFor};
/// use roamer_search::find_best_route;
///
/// let selected = [place("p1", 0.0, 0.0), place("p2", 0.0, 0.0), place("p3", 0.0, 0.0)];
/// let edges: Vec<_> = [
///     symmetric("p1", "p2", 5.0, 10.0),
///     symmetric("p2", "p3", 3.0, 10.0),
///     symmetric("p1", "p3", 10.0, 10.0),
///     symmetric("p3", "elsewhere", 0.1, 1.0),
/// ]
/// .into_iter()
/// .flatten()
/// .collect();
///
/// let route = find_best_route(&selected, &edges, Algorithm::Ucs, OptimizeFor::Distance, None)
///     .expect("route exists");
/// assert_eq!(route.total_distance, 8.0);
/// ```
#[must_use]
pub fn find_best_route(
    selected: &[Place],
    all_edges: &[RouteEdge],
    algorithm: Algorithm,
    optimize_for: OptimizeFor,
    depth_limit: Option<usize>,
) -> Option<Route> {
    let [start, _, ..] = selected else {
        log::debug!("need at least two places to plan a route, got {}", selected.len());
        return None;
    };

    let wanted: HashSet<&str> = selected.iter().map(|p| p.id.as_str()).collect();
    let edges: Vec<RouteEdge> = all_edges
        .iter()
        .filter(|e| wanted.contains(e.from.as_str()) && wanted.contains(e.to.as_str()))
        .cloned()
        .collect();
    log::debug!(
        "finding route with {algorithm} over {} places and {} of {} edges",
        selected.len(),
        edges.len(),
        all_edges.len()
    );

    let start_id = start.id.as_str();
    match algorithm {
        Algorithm::Dfs => dfs(start_id, selected, &edges, None),
        Algorithm::Dls => dls(
            start_id,
            selected,
            &edges,
            depth_limit.unwrap_or(DEFAULT_DEPTH_LIMIT),
        ),
        Algorithm::Ucs => ucs(start_id, selected, &edges, optimize_for),
    }
}
