//! Core domain types for the roamer route planner.
//!
//! Places, edges and routes, the great-circle estimator that fills in
//! missing edge weights, and the collaborator traits for edge suppliers and
//! itinerary persistence. Route search itself lives in `roamer-search`.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
pub mod edges;
pub mod estimate;
mod itinerary;
mod mode;
mod place;
mod provider;
mod route;
mod store;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use edge::RouteEdge;
pub use itinerary::{Itinerary, NewItinerary};
pub use mode::{EstimateMode, TravelMode};
pub use place::{Place, PlaceCategory};
pub use provider::{EdgeProvider, EdgeProviderError, EstimatedEdgeProvider, StaticEdgeProvider};
pub use route::{Algorithm, OptimizeFor, Route, RouteError};
pub use store::{ItineraryStore, MemoryItineraryStore};
#[cfg(feature = "store-sqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "store-sqlite")))]
pub use store::{SqliteItineraryStore, SqliteItineraryStoreError};
