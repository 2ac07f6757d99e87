//! Complete-graph edge generation and supplier data checks.

use std::collections::HashMap;

use crate::estimate::{haversine_raw_km, round_km, travel_minutes};
use crate::{EdgeProviderError, EstimateMode, Place, RouteEdge, TravelMode};

/// Build an edge for every ordered pair of distinct places.
///
/// Distances are the haversine distance rounded to two decimals. Durations
/// come from [`travel_minutes`] applied to the unrounded distance. `n` places yield
/// `n * (n - 1)` edges; fewer than two yield none.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roamer_core::{edges::generate_edges, EstimateMode, Place};
///
/// let places = vec![
///     Place::new("a", "A", Coord { x: 2.2945, y: 48.8584 }),
///     Place::new("b", "B", Coord { x: 2.3376, y: 48.8606 }),
///     Place::new("c", "C", Coord { x: 2.3499, y: 48.8530 }),
/// ];
/// let edges = generate_edges(&places, EstimateMode::Walking);
/// assert_eq!(edges.len(), 6);
/// assert!(edges.iter().all(|e| e.from != e.to));
/// ```
pub fn generate_edges(places: &[Place], mode: EstimateMode) -> Vec<RouteEdge> {
    if places.len() < 2 {
        return Vec::new();
    }
    let travel_mode = TravelMode::from(mode);
    let mut edges = Vec::with_capacity(places.len() * (places.len() - 1));
    for (i, origin) in places.iter().enumerate() {
        for (j, destination) in places.iter().enumerate() {
            if i == j {
                continue;
            }
            let raw = haversine_raw_km(origin.location, destination.location);
            edges.push(RouteEdge {
                from: origin.id.clone(),
                to: destination.id.clone(),
                distance: round_km(raw),
                duration: travel_minutes(raw, mode),
                mode: travel_mode,
                geometry: None,
            });
        }
    }
    edges
}

/// Check supplier edges before they reach the search.
///
/// # Errors
/// Returns [`EdgeProviderError::InvalidEdge`] for the first edge with a
/// negative or non-finite weight, a self loop, or a `(from, to)` pair that
/// repeats an earlier edge with different weights.
pub fn validate_edges(edges: &[RouteEdge]) -> Result<(), EdgeProviderError> {
    let mut seen: HashMap<(&str, &str), (f64, f64)> = HashMap::with_capacity(edges.len());
    for edge in edges {
        let invalid = |reason: &str| EdgeProviderError::InvalidEdge {
            from: edge.from.clone(),
            to: edge.to.clone(),
            reason: reason.to_owned(),
        };
        if edge.from == edge.to {
            return Err(invalid("edge starts and ends at the same place"));
        }
        if !is_weight(edge.distance) {
            return Err(invalid("distance must be finite and non-negative"));
        }
        if !is_weight(edge.duration) {
            return Err(invalid("duration must be finite and non-negative"));
        }
        let weights = (edge.distance, edge.duration);
        match seen.insert((edge.from.as_str(), edge.to.as_str()), weights) {
            Some(previous) if previous != weights => {
                return Err(invalid("pair repeated with different weights"));
            }
            _ => {}
        }
    }
    Ok(())
}

fn is_weight(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
