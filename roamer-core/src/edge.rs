use geo::LineString;

use crate::TravelMode;

/// A directed, weighted leg between two places.
///
/// Distance is in kilometres and duration in minutes, whichever supplier
/// produced the edge. A graph may hold both `A -> B` and `B -> A` with
/// different weights.
///
/// # Examples
/// ```
/// use roamer_core::{RouteEdge, TravelMode};
///
/// let edge = RouteEdge::new("a", "b", 4.5, 25.0).with_mode(TravelMode::Walking);
/// assert!(edge.joins("a", "b"));
/// assert!(!edge.joins("b", "a"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteEdge {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub duration: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: TravelMode,
    /// Path data for display. Never read by the search.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub geometry: Option<LineString<f64>>,
}

impl RouteEdge {
    /// Construct a driving edge without geometry.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64, duration: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            duration,
            mode: TravelMode::Driving,
            geometry: None,
        }
    }

    /// Set the travel mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Attach path geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: LineString<f64>) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Whether this edge leads from `from` to `to`.
    pub fn joins(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }

    /// Return the edge reversed, keeping weights, mode and reversed geometry.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let geometry = self.geometry.as_ref().map(|line| {
            let mut coords = line.0.clone();
            coords.reverse();
            LineString::new(coords)
        });
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            distance: self.distance,
            duration: self.duration,
            mode: self.mode,
            geometry,
        }
    }
}
