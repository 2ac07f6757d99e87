//! Public entry points for the three search strategies.
//!
//! Each takes the id of the start place, the places to visit and the edges
//! between them, and returns a [`Route`] visiting every place exactly once,
//! or `None` when no such path is reachable from the start. Inputs are
//! copied into a private snapshot first, so repeated calls with the same
//! arguments return the same answer.

use roamer_core::{Algorithm, OptimizeFor, Place, Route, RouteEdge};

use crate::backtrack::{self, CandidateOrder, DepthRule, Tour};
use crate::graph::SearchGraph;
use crate::ucs::search as uniform_cost_search;

fn run<F>(start: &str, places: &[Place], edges: &[RouteEdge], algorithm: Algorithm, strategy: F) -> Option<Route>
where
    F: FnOnce(&SearchGraph, usize) -> Option<Tour>,
{
    let graph = SearchGraph::new(places, edges);
    let Some(start_index) = graph.index_of(start) else {
        log::debug!("{algorithm}: start place '{start}' is not among the places");
        return None;
    };
    let tour = strategy(&graph, start_index);
    let route = tour.and_then(|found| graph.route(&found.places, &found.edges, algorithm));
    log::debug!(
        "{algorithm}: {} over {} places and {} edges",
        if route.is_some() { "found a route" } else { "no route" },
        graph.len(),
        graph.edge_count()
    );
    route
}

/// Depth-first search, trying the nearest unvisited neighbour first.
///
/// `max_depth` bounds the number of hops; `None` leaves it unbounded. The
/// first path that covers every place is returned; it need not be the
/// shortest.
///
/// # Examples
/// ```
/// use roamer_core::test_support::{place, symmetric};
/// use roamer_search::dfs;
///
/// let places = [place("a", 0.0, 0.0), place("b", 0.0, 0.0), place("c", 0.0, 0.0)];
/// let edges: Vec<_> = [symmetric("a", "b", 1.0, 2.0), symmetric("b", "c", 1.0, 2.0)]
///     .into_iter()
///     .flatten()
///     .collect();
///
/// let route = dfs("a", &places, &edges, None).expect("chain is traversable");
/// assert_eq!(route.place_ids().collect::<Vec<_>>(), ["a", "b", "c"]);
/// assert!(dfs("b", &places, &edges, None).is_none());
/// ```
#[must_use]
pub fn dfs(start: &str, places: &[Place], edges: &[RouteEdge], max_depth: Option<usize>) -> Option<Route> {
    run(start, places, edges, Algorithm::Dfs, |graph, start_index| {
        backtrack::search(
            graph,
            start_index,
            CandidateOrder::NearestFirst,
            DepthRule::FailBeyond(max_depth),
        )
    })
}

/// Depth-limited search, trying the farthest unvisited neighbour first.
///
/// The place reached at depth `depth_limit` is not visited, so covering
/// `n` places needs `depth_limit >= n`.
#[must_use]
pub fn dls(start: &str, places: &[Place], edges: &[RouteEdge], depth_limit: usize) -> Option<Route> {
    run(start, places, edges, Algorithm::Dls, |graph, start_index| {
        backtrack::search(
            graph,
            start_index,
            CandidateOrder::FarthestFirst,
            DepthRule::CompleteBy(depth_limit),
        )
    })
}

/// Uniform-cost search for the cheapest path covering every place.
///
/// Cost is the sum of edge distances or durations, as chosen by `metric`.
#[must_use]
pub fn ucs(start: &str, places: &[Place], edges: &[RouteEdge], metric: OptimizeFor) -> Option<Route> {
    run(start, places, edges, Algorithm::Ucs, |graph, start_index| {
        uniform_cost_search(graph, start_index, metric)
    })
}
