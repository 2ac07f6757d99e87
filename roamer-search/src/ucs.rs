//! Uniform-cost search over partial-path states.
//!
//! A state is the current place plus the set of places visited so far. The
//! frontier pops states in non-decreasing path cost, ties in insertion
//! order, so the first complete state popped is a cheapest complete path.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use roamer_core::OptimizeFor;

use crate::backtrack::Tour;
use crate::graph::SearchGraph;
use crate::visited::VisitedSet;

/// One step of a partial path, linked to the step before it.
#[derive(Debug, Clone, Copy)]
struct Step {
    place: usize,
    edge: Option<usize>,
    parent: Option<usize>,
}

#[derive(Debug)]
struct Frontier {
    cost: f64,
    seq: u64,
    step: usize,
    visited: VisitedSet,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Find the cheapest path from `start` visiting every place exactly once.
pub(crate) fn search(graph: &SearchGraph, start: usize, metric: OptimizeFor) -> Option<Tour> {
    expand(graph, start, metric).0
}

/// Run the search, also returning how many steps were recorded.
fn expand(graph: &SearchGraph, start: usize, metric: OptimizeFor) -> (Option<Tour>, usize) {
    let mut steps = vec![Step {
        place: start,
        edge: None,
        parent: None,
    }];
    let mut visited = VisitedSet::with_capacity(graph.len());
    visited.insert(start);

    let mut seq: u64 = 0;
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(Frontier {
        cost: 0.0,
        seq,
        step: 0,
        visited,
    }));
    let mut explored: HashMap<(usize, VisitedSet), f64> = HashMap::new();

    while let Some(Reverse(state)) = frontier.pop() {
        if state.visited.len() == graph.len() {
            log::debug!(
                "ucs settled after {} states, cost {}",
                explored.len(),
                state.cost
            );
            return (Some(unwind(&steps, state.step)), steps.len());
        }

        let Some(place) = steps.get(state.step).map(|step| step.place) else {
            continue;
        };
        let key = (place, state.visited);
        if explored.get(&key).is_some_and(|&best| best <= state.cost) {
            continue;
        }
        explored.insert(key.clone(), state.cost);
        let (_, visited_here) = key;

        for &edge_index in graph.outgoing(place) {
            let Some(indexed) = graph.edge(edge_index) else {
                continue;
            };
            if visited_here.contains(indexed.to) {
                continue;
            }
            let mut reached = visited_here.clone();
            reached.insert(indexed.to);
            let cost = extend(state.cost, metric.weight(&indexed.edge));
            let next_key = (indexed.to, reached);
            if explored.get(&next_key).is_some_and(|&best| best <= cost) {
                continue;
            }
            let (_, next_visited) = next_key;
            steps.push(Step {
                place: indexed.to,
                edge: Some(edge_index),
                parent: Some(state.step),
            });
            seq += 1;
            frontier.push(Reverse(Frontier {
                cost,
                seq,
                step: steps.len() - 1,
                visited: next_visited,
            }));
        }
    }
    (None, steps.len())
}

#[expect(
    clippy::float_arithmetic,
    reason = "path cost is the running sum of edge weights"
)]
fn extend(cost: f64, weight: f64) -> f64 {
    cost + weight
}

/// Walk parent links back to the start and return the path in order.
fn unwind(steps: &[Step], last: usize) -> Tour {
    let mut places = Vec::new();
    let mut edges = Vec::new();
    let mut cursor = Some(last);
    while let Some(step) = cursor.and_then(|i| steps.get(i)) {
        places.push(step.place);
        if let Some(edge) = step.edge {
            edges.push(edge);
        }
        cursor = step.parent;
    }
    places.reverse();
    edges.reverse();
    Tour { places, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roamer_core::RouteEdge;
    use roamer_core::test_support::{place, symmetric};

    fn triangle() -> SearchGraph {
        let places = [place("p1", 0.0, 0.0), place("p2", 0.0, 0.0), place("p3", 0.0, 0.0)];
        let edges: Vec<RouteEdge> = [
            symmetric("p1", "p2", 5.0, 30.0),
            symmetric("p2", "p3", 3.0, 30.0),
            symmetric("p1", "p3", 10.0, 5.0),
        ]
        .into_iter()
        .flatten()
        .collect();
        SearchGraph::new(&places, &edges)
    }

    #[test]
    fn finds_cheapest_distance_path() {
        let tour = search(&triangle(), 0, OptimizeFor::Distance).expect("route exists");
        assert_eq!(tour.places, [0, 1, 2]);
    }

    #[test]
    fn duration_metric_changes_the_answer() {
        let tour = search(&triangle(), 0, OptimizeFor::Duration).expect("route exists");
        assert_eq!(tour.places, [0, 2, 1]);
    }

    #[test]
    fn unreachable_goal_exhausts_the_frontier() {
        let places = [place("a", 0.0, 0.0), place("b", 0.0, 0.0), place("c", 0.0, 0.0)];
        let edges = [RouteEdge::new("a", "b", 1.0, 1.0), RouteEdge::new("a", "c", 1.0, 1.0)];
        let graph = SearchGraph::new(&places, &edges);
        assert!(search(&graph, 0, OptimizeFor::Distance).is_none());
    }

    #[test]
    fn settled_states_are_not_recorded_again() {
        let places = [
            place("a", 0.0, 0.0),
            place("b", 0.0, 0.0),
            place("c", 0.0, 0.0),
            place("d", 0.0, 0.0),
            place("e", 0.0, 0.0),
        ];
        let edges = [
            RouteEdge::new("a", "b", 1.0, 1.0),
            RouteEdge::new("b", "c", 1.0, 1.0),
            RouteEdge::new("c", "d", 1.0, 1.0),
            RouteEdge::new("a", "c", 1.0, 1.0),
            RouteEdge::new("c", "b", 5.0, 1.0),
            RouteEdge::new("b", "d", 1.0, 1.0),
            RouteEdge::new("d", "e", 100.0, 1.0),
        ];
        let graph = SearchGraph::new(&places, &edges);
        let (tour, recorded) = expand(&graph, 0, OptimizeFor::Distance);

        assert_eq!(tour.expect("route exists").places, [0, 1, 2, 3, 4]);
        // d reached again via a -> c -> b at cost 7 after settling at 3 adds no step.
        assert_eq!(recorded, 11);
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        let places = [place("a", 0.0, 0.0), place("b", 0.0, 0.0), place("c", 0.0, 0.0)];
        let edges = [
            RouteEdge::new("a", "c", 1.0, 1.0),
            RouteEdge::new("a", "b", 1.0, 1.0),
            RouteEdge::new("c", "b", 1.0, 1.0),
            RouteEdge::new("b", "c", 1.0, 1.0),
        ];
        let graph = SearchGraph::new(&places, &edges);
        let tour = search(&graph, 0, OptimizeFor::Distance).expect("route exists");
        assert_eq!(tour.places, [0, 2, 1]);
        assert_eq!(tour.edges, [0, 2]);
    }
}
