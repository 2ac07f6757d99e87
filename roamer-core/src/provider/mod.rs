//! Suppliers of route edges between places.
//!
//! The [`EdgeProvider`] trait abstracts where edge weights come from: the
//! great-circle estimator, a fixed dataset, or a live routing service. Every
//! implementation reports kilometres and minutes and never repeats a
//! `(from, to)` pair with different weights within one call.

mod error;
mod estimated;
mod fixed;

pub use error::EdgeProviderError;
pub use estimated::EstimatedEdgeProvider;
pub use fixed::StaticEdgeProvider;

use crate::{EstimateMode, Place, RouteEdge};

/// Supply directed edges between a set of places.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use roamer_core::{EdgeProvider, EdgeProviderError, EstimateMode, Place, RouteEdge};
///
/// struct FlatProvider;
///
/// impl EdgeProvider for FlatProvider {
///     fn route_edges(
///         &self,
///         places: &[Place],
///         _mode: EstimateMode,
///     ) -> Result<Vec<RouteEdge>, EdgeProviderError> {
///         if places.len() < 2 {
///             return Err(EdgeProviderError::EmptyInput);
///         }
///         Ok(places
///             .iter()
///             .flat_map(|a| places.iter().map(move |b| (a, b)))
///             .filter(|(a, b)| a.id != b.id)
///             .map(|(a, b)| RouteEdge::new(a.id.clone(), b.id.clone(), 1.0, 1.0))
///             .collect())
///     }
/// }
///
/// let places = vec![
///     Place::new("a", "A", Coord { x: 0.0, y: 0.0 }),
///     Place::new("b", "B", Coord { x: 1.0, y: 1.0 }),
/// ];
/// let edges = FlatProvider.route_edges(&places, EstimateMode::Driving)?;
/// assert_eq!(edges.len(), 2);
/// # Ok::<(), EdgeProviderError>(())
/// ```
pub trait EdgeProvider {
    /// Return edges between `places` for the given travel mode.
    ///
    /// Implementations must return `Err(EdgeProviderError::EmptyInput)` when
    /// fewer than two places are supplied. Pairs the supplier cannot connect
    /// are simply absent from the result.
    fn route_edges(
        &self,
        places: &[Place],
        mode: EstimateMode,
    ) -> Result<Vec<RouteEdge>, EdgeProviderError>;
}

impl<T: EdgeProvider + ?Sized> EdgeProvider for &T {
    fn route_edges(
        &self,
        places: &[Place],
        mode: EstimateMode,
    ) -> Result<Vec<RouteEdge>, EdgeProviderError> {
        (**self).route_edges(places, mode)
    }
}

impl<T: EdgeProvider + ?Sized> EdgeProvider for Box<T> {
    fn route_edges(
        &self,
        places: &[Place],
        mode: EstimateMode,
    ) -> Result<Vec<RouteEdge>, EdgeProviderError> {
        (**self).route_edges(places, mode)
    }
}
