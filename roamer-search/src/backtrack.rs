//! Recursive backtracking shared by depth-first and depth-limited search.
//!
//! Both strategies extend a path one edge at a time, trying unvisited
//! neighbours in a fixed order and undoing each step on failure. The first
//! path that covers every place wins.

use std::cmp::Ordering;

use crate::graph::SearchGraph;
use crate::visited::VisitedSet;

/// Order in which candidate edges are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CandidateOrder {
    /// Shortest distance first.
    NearestFirst,
    /// Longest distance first.
    FarthestFirst,
}

/// When a branch is cut off by depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DepthRule {
    /// Fail once the depth exceeds the bound; `None` never cuts off.
    FailBeyond(Option<usize>),
    /// On reaching the ceiling, succeed only if every place is already
    /// visited. The arriving place is not counted.
    CompleteBy(usize),
}

/// A path found by [`search`], as place and edge indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tour {
    pub(crate) places: Vec<usize>,
    pub(crate) edges: Vec<usize>,
}

struct Backtracker<'g> {
    graph: &'g SearchGraph,
    order: CandidateOrder,
    rule: DepthRule,
    visited: VisitedSet,
    path: Vec<usize>,
    legs: Vec<usize>,
}

/// Search for a path from `start` covering every place in `graph`.
pub(crate) fn search(
    graph: &SearchGraph,
    start: usize,
    order: CandidateOrder,
    rule: DepthRule,
) -> Option<Tour> {
    let mut state = Backtracker {
        graph,
        order,
        rule,
        visited: VisitedSet::with_capacity(graph.len()),
        path: Vec::with_capacity(graph.len()),
        legs: Vec::with_capacity(graph.len()),
    };
    state.visit(start, 0).then(|| Tour {
        places: state.path,
        edges: state.legs,
    })
}

impl Backtracker<'_> {
    fn all_visited(&self) -> bool {
        self.visited.len() == self.graph.len()
    }

    fn visit(&mut self, current: usize, depth: usize) -> bool {
        match self.rule {
            DepthRule::FailBeyond(Some(max_depth)) if depth > max_depth => return false,
            DepthRule::CompleteBy(limit) if depth >= limit => return self.all_visited(),
            DepthRule::FailBeyond(_) | DepthRule::CompleteBy(_) => {}
        }

        self.path.push(current);
        self.visited.insert(current);
        if self.all_visited() {
            return true;
        }

        for (edge, next) in self.candidates(current) {
            self.legs.push(edge);
            if self.visit(next, depth + 1) {
                return true;
            }
            self.legs.pop();
        }

        self.visited.remove(current);
        self.path.pop();
        false
    }

    /// Unvisited neighbours of `current` as `(edge, place)` pairs, stably
    /// sorted by distance in the configured order.
    fn candidates(&self, current: usize) -> Vec<(usize, usize)> {
        let mut found: Vec<(usize, usize, f64)> = self
            .graph
            .outgoing(current)
            .iter()
            .filter_map(|&e| self.graph.edge(e).map(|indexed| (e, indexed)))
            .filter(|(_, indexed)| !self.visited.contains(indexed.to))
            .map(|(e, indexed)| (e, indexed.to, indexed.edge.distance))
            .collect();
        let order = self.order;
        found.sort_by(|a, b| compare_distance(order, a.2, b.2));
        found.into_iter().map(|(e, to, _)| (e, to)).collect()
    }
}

fn compare_distance(order: CandidateOrder, a: f64, b: f64) -> Ordering {
    match order {
        CandidateOrder::NearestFirst => a.total_cmp(&b),
        CandidateOrder::FarthestFirst => b.total_cmp(&a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roamer_core::RouteEdge;
    use roamer_core::test_support::{place, symmetric};
    use rstest::rstest;

    fn chain() -> SearchGraph {
        let places = [place("a", 0.0, 0.0), place("b", 0.0, 0.0), place("c", 0.0, 0.0)];
        let edges: Vec<RouteEdge> = [symmetric("a", "b", 1.0, 1.0), symmetric("b", "c", 1.0, 1.0)]
            .into_iter()
            .flatten()
            .collect();
        SearchGraph::new(&places, &edges)
    }

    #[rstest]
    #[case(DepthRule::FailBeyond(None), true)]
    #[case(DepthRule::FailBeyond(Some(2)), true)]
    #[case(DepthRule::FailBeyond(Some(1)), false)]
    #[case(DepthRule::CompleteBy(3), true)]
    #[case(DepthRule::CompleteBy(2), false)]
    fn depth_rules_bound_a_three_stop_chain(#[case] rule: DepthRule, #[case] found: bool) {
        let tour = search(&chain(), 0, CandidateOrder::NearestFirst, rule);
        assert_eq!(tour.is_some(), found, "{rule:?}");
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        // From a, the nearest neighbour c is a dead end: c only leads back to a.
        let places = [place("a", 0.0, 0.0), place("b", 0.0, 0.0), place("c", 0.0, 0.0)];
        let edges = [
            RouteEdge::new("a", "c", 1.0, 1.0),
            RouteEdge::new("c", "a", 1.0, 1.0),
            RouteEdge::new("a", "b", 5.0, 5.0),
            RouteEdge::new("b", "c", 5.0, 5.0),
        ];
        let graph = SearchGraph::new(&places, &edges);
        let tour = search(&graph, 0, CandidateOrder::NearestFirst, DepthRule::FailBeyond(None))
            .expect("a -> b -> c exists");
        assert_eq!(tour.places, [0, 1, 2]);
        assert_eq!(tour.edges, [2, 3]);
    }

    #[test]
    fn equal_distances_keep_input_order() {
        let places = [place("a", 0.0, 0.0), place("b", 0.0, 0.0), place("c", 0.0, 0.0)];
        let edges = [
            RouteEdge::new("a", "c", 2.0, 1.0),
            RouteEdge::new("a", "b", 2.0, 1.0),
            RouteEdge::new("b", "c", 2.0, 1.0),
            RouteEdge::new("c", "b", 2.0, 1.0),
        ];
        let graph = SearchGraph::new(&places, &edges);
        for order in [CandidateOrder::NearestFirst, CandidateOrder::FarthestFirst] {
            let tour = search(&graph, 0, order, DepthRule::FailBeyond(None)).expect("tour exists");
            assert_eq!(tour.places, [0, 2, 1], "{order:?}");
        }
    }
}
