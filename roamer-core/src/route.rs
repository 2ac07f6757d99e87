//! Search results and the tags describing how they were produced.

use std::collections::HashSet;

use thiserror::Error;

use crate::estimate::{round_km, round_minutes};
use crate::{Place, RouteEdge};

/// Search strategy that produced a [`Route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Depth-first backtracking, nearest candidate first.
    Dfs,
    /// Depth-limited backtracking, farthest candidate first.
    Dls,
    /// Uniform-cost search for the cheapest complete path.
    #[default]
    Ucs,
}

impl Algorithm {
    /// Return the algorithm tag as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Dls => "dls",
            Self::Ucs => "ucs",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(Self::Dfs),
            "dls" => Ok(Self::Dls),
            "ucs" => Ok(Self::Ucs),
            _ => Err(format!("unknown algorithm '{s}'")),
        }
    }
}

/// Edge weight minimised by cost-aware searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptimizeFor {
    /// Kilometres.
    #[default]
    Distance,
    /// Minutes.
    Duration,
}

impl OptimizeFor {
    /// Return the metric as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Duration => "duration",
        }
    }

    /// Weight of `edge` under this metric.
    pub const fn weight(self, edge: &RouteEdge) -> f64 {
        match self {
            Self::Distance => edge.distance,
            Self::Duration => edge.duration,
        }
    }
}

impl std::fmt::Display for OptimizeFor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptimizeFor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" => Ok(Self::Distance),
            "duration" => Ok(Self::Duration),
            _ => Err(format!("unknown optimisation metric '{s}'")),
        }
    }
}

/// Reasons a place sequence and edge list do not form a [`Route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A route needs at least one place.
    #[error("a route needs at least one place")]
    Empty,
    /// There must be exactly one edge between each consecutive pair of places.
    #[error("expected {expected} edges for {places} places, got {actual}")]
    EdgeCount {
        /// Number of places supplied.
        places: usize,
        /// `places - 1`.
        expected: usize,
        /// Number of edges supplied.
        actual: usize,
    },
    /// A place id occurs more than once in the sequence.
    #[error("place '{id}' is visited more than once")]
    RepeatedPlace {
        /// The repeated id.
        id: String,
    },
    /// An edge does not join the places either side of it.
    #[error("edge {index} runs {from} -> {to}, expected {expected_from} -> {expected_to}")]
    Disconnected {
        /// Position of the edge in the list.
        index: usize,
        /// Edge origin.
        from: String,
        /// Edge destination.
        to: String,
        /// Id of `places[index]`.
        expected_from: String,
        /// Id of `places[index + 1]`.
        expected_to: String,
    },
}

/// An ordered visit of every selected place, starting at the first.
///
/// Construct through [`Route::from_path`], which enforces the shape
/// invariants and computes the rounded totals.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roamer_core::{Algorithm, Place, Route, RouteEdge};
///
/// let places = vec![
///     Place::new("a", "A", Coord { x: 0.0, y: 0.0 }),
///     Place::new("b", "B", Coord { x: 0.0, y: 1.0 }),
/// ];
/// let edges = vec![RouteEdge::new("a", "b", 1.234, 2.6)];
/// let route = Route::from_path(places, edges, Algorithm::Dfs).expect("valid route");
///
/// assert_eq!(route.total_distance, 1.23);
/// assert_eq!(route.total_duration, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Route {
    /// Places in visiting order, starting with the start place.
    pub places: Vec<Place>,
    /// `edges[i]` runs from `places[i]` to `places[i + 1]`.
    pub edges: Vec<RouteEdge>,
    /// Sum of edge distances in kilometres, rounded to two decimals.
    pub total_distance: f64,
    /// Sum of edge durations, rounded to whole minutes.
    pub total_duration: u64,
    /// Strategy that found the route.
    pub algorithm: Algorithm,
}

impl Route {
    /// Assemble a route from a visiting order and the edges between stops.
    ///
    /// # Errors
    /// Returns [`RouteError`] when the sequence is empty, repeats a place,
    /// has the wrong number of edges, or an edge does not join its
    /// neighbouring places.
    pub fn from_path(
        places: Vec<Place>,
        edges: Vec<RouteEdge>,
        algorithm: Algorithm,
    ) -> Result<Self, RouteError> {
        if places.is_empty() {
            return Err(RouteError::Empty);
        }
        let expected = places.len() - 1;
        if edges.len() != expected {
            return Err(RouteError::EdgeCount {
                places: places.len(),
                expected,
                actual: edges.len(),
            });
        }

        let mut seen = HashSet::with_capacity(places.len());
        for place in &places {
            if !seen.insert(place.id.as_str()) {
                return Err(RouteError::RepeatedPlace {
                    id: place.id.clone(),
                });
            }
        }

        for (index, (edge, pair)) in edges.iter().zip(places.windows(2)).enumerate() {
            let [origin, destination] = pair else {
                continue;
            };
            if !edge.joins(&origin.id, &destination.id) {
                return Err(RouteError::Disconnected {
                    index,
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    expected_from: origin.id.clone(),
                    expected_to: destination.id.clone(),
                });
            }
        }

        let distance: f64 = edges.iter().map(|e| e.distance).sum();
        let duration: f64 = edges.iter().map(|e| e.duration).sum();

        Ok(Self {
            places,
            edges,
            total_distance: round_km(distance),
            total_duration: whole_minutes(duration),
            algorithm,
        })
    }

    /// Total cost under `metric`, as reported in the rounded totals.
    pub fn cost(&self, metric: OptimizeFor) -> f64 {
        match metric {
            OptimizeFor::Distance => self.total_distance,
            OptimizeFor::Duration => self.total_duration as f64,
        }
    }

    /// Ids of the visited places in order.
    pub fn place_ids(&self) -> impl Iterator<Item = &str> {
        self.places.iter().map(|p| p.id.as_str())
    }
}

fn whole_minutes(minutes: f64) -> u64 {
    let rounded = round_minutes(minutes);
    if rounded.is_finite() && rounded > 0.0 {
        rounded as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};
    use std::str::FromStr;

    #[fixture]
    fn trio() -> Vec<Place> {
        ["p1", "p2", "p3"]
            .into_iter()
            .map(|id| Place::new(id, id.to_uppercase(), Coord { x: 0.0, y: 0.0 }))
            .collect()
    }

    #[rstest]
    fn totals_are_rounded(trio: Vec<Place>) {
        let edges = vec![
            RouteEdge::new("p1", "p2", 1.112, 10.4),
            RouteEdge::new("p2", "p3", 2.224, 10.2),
        ];
        let route = Route::from_path(trio, edges, Algorithm::Ucs).expect("valid");
        assert_eq!(route.total_distance, 3.34);
        assert_eq!(route.total_duration, 21);
        assert_eq!(route.cost(OptimizeFor::Duration), 21.0);
    }

    #[rstest]
    fn single_place_is_a_trivial_route(trio: Vec<Place>) {
        let start = trio.into_iter().take(1).collect();
        let route = Route::from_path(start, Vec::new(), Algorithm::Dfs).expect("valid");
        assert_eq!(route.total_distance, 0.0);
        assert_eq!(route.total_duration, 0);
    }

    #[rstest]
    fn rejects_wrong_edge_count(trio: Vec<Place>) {
        let err = Route::from_path(trio, vec![RouteEdge::new("p1", "p2", 1.0, 1.0)], Algorithm::Dfs)
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::EdgeCount {
                places: 3,
                expected: 2,
                actual: 1
            }
        );
    }

    #[rstest]
    fn rejects_repeated_place(mut trio: Vec<Place>) {
        trio[2] = trio[0].clone();
        let edges = vec![
            RouteEdge::new("p1", "p2", 1.0, 1.0),
            RouteEdge::new("p2", "p1", 1.0, 1.0),
        ];
        let err = Route::from_path(trio, edges, Algorithm::Dfs).unwrap_err();
        assert_eq!(err, RouteError::RepeatedPlace { id: "p1".into() });
    }

    #[rstest]
    fn rejects_edge_that_skips_a_stop(trio: Vec<Place>) {
        let edges = vec![
            RouteEdge::new("p1", "p3", 1.0, 1.0),
            RouteEdge::new("p3", "p2", 1.0, 1.0),
        ];
        let err = Route::from_path(trio, edges, Algorithm::Dls).unwrap_err();
        assert!(matches!(err, RouteError::Disconnected { index: 0, .. }));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(
            Route::from_path(Vec::new(), Vec::new(), Algorithm::Ucs),
            Err(RouteError::Empty)
        );
    }

    #[rstest]
    #[case("dfs", Algorithm::Dfs)]
    #[case("DLS", Algorithm::Dls)]
    #[case("ucs", Algorithm::Ucs)]
    fn parses_algorithm_tags(#[case] raw: &str, #[case] expected: Algorithm) {
        assert_eq!(Algorithm::from_str(raw), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown_metric() {
        let err = OptimizeFor::from_str("scenery").unwrap_err();
        assert!(err.contains("unknown optimisation metric"));
    }
}
