//! Facade crate for the roamer route planner.
//!
//! Re-exports the domain types, the search strategies and the planner.
//! The itinerary store and the HTTP edge supplier sit behind feature flags.

#![forbid(unsafe_code)]

pub use roamer_core::{
    Algorithm, EdgeProvider, EdgeProviderError, EstimateMode, EstimatedEdgeProvider, Itinerary,
    ItineraryStore, MemoryItineraryStore, NewItinerary, OptimizeFor, Place, PlaceCategory, Route,
    RouteEdge, RouteError, StaticEdgeProvider, TravelMode,
};
pub use roamer_core::{edges, estimate};

pub use roamer_search::{
    DEFAULT_DEPTH_LIMIT, Diagnostics, EdgeSource, PlanRequest, PlanResponse, PlannerConfig,
    RoutePlanner, dfs, dls, find_best_route, ucs,
};

#[cfg(feature = "store-sqlite")]
pub use roamer_core::{SqliteItineraryStore, SqliteItineraryStoreError};

#[cfg(feature = "http")]
pub use roamer_data::routing::{HttpEdgeProvider, HttpEdgeProviderConfig, ProviderBuildError};

#[cfg(feature = "http")]
pub use roamer_data::sample;
