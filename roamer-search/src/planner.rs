//! Plan a route end to end: fetch edges, fall back when the supplier
//! misbehaves, then search.

use std::time::{Duration, Instant};

use roamer_core::{
    Algorithm, EdgeProvider, EstimateMode, OptimizeFor, Place, Route, RouteEdge,
    edges::{generate_edges, validate_edges},
};

use crate::{DEFAULT_DEPTH_LIMIT, find_best_route};

/// Configuration for [`RoutePlanner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// DLS depth limit applied when a request does not set one.
    pub default_depth_limit: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }
}

impl PlannerConfig {
    /// Override the default DLS depth limit.
    #[must_use]
    pub const fn with_default_depth_limit(mut self, depth_limit: usize) -> Self {
        self.default_depth_limit = depth_limit;
        self
    }
}

/// Parameters for a planning request.
///
/// # Examples
/// ```rust
/// use roamer_core::{Algorithm, OptimizeFor};
/// use roamer_search::PlanRequest;
///
/// let request = PlanRequest::new(Vec::new(), Algorithm::Dls).with_depth_limit(5);
/// assert_eq!(request.optimize_for, OptimizeFor::Distance);
/// assert_eq!(request.depth_limit, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Places to visit; the first is the start.
    pub places: Vec<Place>,
    /// Mode used when edges have to be estimated.
    pub mode: EstimateMode,
    /// Search strategy.
    pub algorithm: Algorithm,
    /// Metric minimised by UCS.
    pub optimize_for: OptimizeFor,
    /// DLS depth limit; `None` uses the planner default.
    pub depth_limit: Option<usize>,
}

impl PlanRequest {
    /// A driving request minimising distance.
    pub const fn new(places: Vec<Place>, algorithm: Algorithm) -> Self {
        Self {
            places,
            mode: EstimateMode::Driving,
            algorithm,
            optimize_for: OptimizeFor::Distance,
            depth_limit: None,
        }
    }

    /// Set the estimate mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: EstimateMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the optimisation metric.
    #[must_use]
    pub const fn with_optimize_for(mut self, optimize_for: OptimizeFor) -> Self {
        self.optimize_for = optimize_for;
        self
    }

    /// Set the DLS depth limit.
    #[must_use]
    pub const fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = Some(depth_limit);
        self
    }
}

/// Where the edges used for a plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSource {
    /// The configured supplier.
    Supplied,
    /// The great-circle estimator, after the supplier failed.
    Estimated,
    /// No edges were needed because fewer than two places were given.
    Skipped,
}

impl EdgeSource {
    /// Return the source as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supplied => "supplied",
            Self::Estimated => "estimated",
            Self::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for EdgeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing and size information about a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    /// Time spent in the search itself.
    pub search_time: Duration,
    /// Number of edges handed to the search.
    pub edges_considered: u64,
}

/// Outcome of [`RoutePlanner::plan`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResponse {
    /// The route, or `None` when no route covers every place.
    pub route: Option<Route>,
    /// Origin of the edges.
    pub edge_source: EdgeSource,
    /// Timing and size information.
    pub diagnostics: Diagnostics,
}

/// Route planner over an edge supplier.
///
/// Supplier failures and invalid supplier data never reach the caller: the
/// planner logs them and searches over estimated edges instead.
#[derive(Debug, Clone)]
pub struct RoutePlanner<P> {
    provider: P,
    config: PlannerConfig,
}

impl<P: EdgeProvider> RoutePlanner<P> {
    /// Construct a planner using default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(provider: P, config: PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// Plan a route for `request`.
    #[must_use]
    pub fn plan(&self, request: &PlanRequest) -> PlanResponse {
        if request.places.len() < 2 {
            log::debug!("skipping plan for {} place(s)", request.places.len());
            return PlanResponse {
                route: None,
                edge_source: EdgeSource::Skipped,
                diagnostics: Diagnostics::default(),
            };
        }

        let (edges, edge_source) = self.edges_for(request);
        let depth_limit = request
            .depth_limit
            .unwrap_or(self.config.default_depth_limit);

        let started_at = Instant::now();
        let route = find_best_route(
            &request.places,
            &edges,
            request.algorithm,
            request.optimize_for,
            Some(depth_limit),
        );
        let diagnostics = Diagnostics {
            search_time: started_at.elapsed(),
            edges_considered: edges.len() as u64,
        };

        if route.is_none() {
            log::info!(
                "no {} route covers all {} places",
                request.algorithm,
                request.places.len()
            );
        }
        PlanResponse {
            route,
            edge_source,
            diagnostics,
        }
    }

    fn edges_for(&self, request: &PlanRequest) -> (Vec<RouteEdge>, EdgeSource) {
        let supplied = self
            .provider
            .route_edges(&request.places, request.mode)
            .and_then(|edges| validate_edges(&edges).map(|()| edges));
        match supplied {
            Ok(edges) => (edges, EdgeSource::Supplied),
            Err(err) => {
                log::warn!("edge supplier failed, using estimated edges: {err}");
                (
                    generate_edges(&request.places, request.mode),
                    EdgeSource::Estimated,
                )
            }
        }
    }
}
