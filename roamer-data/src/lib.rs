//! Edge suppliers and datasets for the roamer route planner.
//!
//! Responsibilities:
//! - Fetch travel distances and durations from an OSRM routing service.
//! - Ship the Paris landmark sample used by demos, tests and benchmarks.
//!
//! Boundaries:
//! - Search and fallback policy live in `roamer-search`.
//! - Domain types and validation live in `roamer-core`.
//!
//! Invariants:
//! - No global mutable state.
//! - Suppliers never return self loops or negative weights.

#![forbid(unsafe_code)]

pub mod routing;
pub mod sample;
