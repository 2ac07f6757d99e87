//! Route search for roamer.
//!
//! Three strategies find an order in which to visit every selected place
//! exactly once, starting from the first:
//!
//! - [`dfs`] backtracks depth-first, nearest neighbour first, and returns the
//!   first complete path.
//! - [`dls`] backtracks farthest neighbour first under a hard depth ceiling.
//! - [`ucs`] expands partial paths cheapest first and returns a minimum-cost
//!   path under the chosen metric.
//!
//! [`find_best_route`] filters edges to the selection and dispatches, and
//! [`RoutePlanner`] wraps it with an edge supplier that falls back to
//! estimated edges when the supplier fails. "No route" is always `None`,
//! never an error. Costs are exponential in the number of places, so keep
//! selections to tens of places.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assemble;
mod backtrack;
mod graph;
mod planner;
mod strategy;
mod ucs;
mod visited;

pub use assemble::{DEFAULT_DEPTH_LIMIT, find_best_route};
pub use planner::{Diagnostics, EdgeSource, PlanRequest, PlanResponse, PlannerConfig, RoutePlanner};
pub use strategy::{dfs, dls, ucs};
