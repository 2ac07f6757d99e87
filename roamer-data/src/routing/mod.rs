//! HTTP-backed edge suppliers for routing services.
//!
//! [`HttpEdgeProvider`] implements [`roamer_core::EdgeProvider`] on top of
//! the OSRM Table API, asking for both distances and durations between every
//! pair of places in one request.
//!
//! The [`EdgeProvider`](roamer_core::EdgeProvider) trait is synchronous, so
//! the provider blocks on its asynchronous HTTP client internally. Planners
//! built on it stay usable from plain synchronous code.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use geo::Coord;
//! use roamer_core::{EdgeProvider, EstimateMode, Place};
//! use roamer_data::routing::{HttpEdgeProvider, HttpEdgeProviderConfig};
//!
//! let config = HttpEdgeProviderConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpEdgeProvider::with_config(config)?;
//!
//! let places = vec![
//!     Place::new("eiffel", "Eiffel Tower", Coord { x: 2.2945, y: 48.8584 }),
//!     Place::new("louvre", "Louvre Museum", Coord { x: 2.3376, y: 48.8606 }),
//! ];
//! let edges = provider.route_edges(&places, EstimateMode::Driving)?;
//! println!("{} edges", edges.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DEFAULT_USER_AGENT, HttpEdgeProvider, HttpEdgeProviderConfig, ProviderBuildError,
};
