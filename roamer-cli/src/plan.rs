//! `plan` command: search a route through the places in a JSON file.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roamer_core::{
    Algorithm, EdgeProvider, EstimateMode, EstimatedEdgeProvider, OptimizeFor, Place, Route,
    RouteEdge, StaticEdgeProvider,
};
use roamer_data::routing::{HttpEdgeProvider, HttpEdgeProviderConfig};
use roamer_search::{PlanRequest, PlanResponse, PlannerConfig, RoutePlanner};
use serde::{Deserialize, Serialize};

use crate::fs::read_json;
use crate::{
    ARG_PLAN_ALGORITHM, ARG_PLAN_DEPTH_LIMIT, ARG_PLAN_EDGES, ARG_PLAN_MODE,
    ARG_PLAN_OPTIMIZE_FOR, ARG_PLAN_OSRM_BASE_URL, ARG_PLAN_PLACES, CliError, ENV_PLAN_PLACES,
    write_json,
};

/// DLS depth limit used by `plan` when none is configured.
pub(crate) const CLI_DEFAULT_DEPTH_LIMIT: usize = 5;

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Find a route visiting every place listed in a JSON file, \
                 starting from the first. Edges come from --edges when given, \
                 otherwise from an OSRM server when --osrm-base-url is set, \
                 otherwise from straight-line estimates.",
    about = "Plan a route through a list of places"
)]
#[ortho_config(prefix = "ROAMER")]
pub(crate) struct PlanArgs {
    /// Path to a JSON array of places.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Path to a JSON array of edges to search over.
    #[arg(long = ARG_PLAN_EDGES, value_name = "path")]
    #[serde(default)]
    pub(crate) edges: Option<Utf8PathBuf>,
    /// Base URL for an OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_PLAN_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// Search strategy: dfs, dls or ucs.
    #[arg(long = ARG_PLAN_ALGORITHM, value_name = "name")]
    #[serde(default)]
    pub(crate) algorithm: Option<Algorithm>,
    /// Metric minimised by ucs: distance or duration.
    #[arg(long = ARG_PLAN_OPTIMIZE_FOR, value_name = "metric")]
    #[serde(default)]
    pub(crate) optimize_for: Option<OptimizeFor>,
    /// Depth limit for dls.
    #[arg(long = ARG_PLAN_DEPTH_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) depth_limit: Option<usize>,
    /// Travel mode for estimated or OSRM edges: driving, walking or cycling.
    #[arg(long = ARG_PLAN_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<EstimateMode>,
}

impl PlanArgs {
    fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Where `plan` takes its edges from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EdgeSupply {
    /// A JSON edge file.
    File(Utf8PathBuf),
    /// An OSRM server.
    Osrm(String),
    /// Straight-line estimates.
    Estimated,
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) places: Utf8PathBuf,
    pub(crate) supply: EdgeSupply,
    pub(crate) algorithm: Algorithm,
    pub(crate) optimize_for: OptimizeFor,
    pub(crate) depth_limit: usize,
    pub(crate) mode: EstimateMode,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_PLACES,
            env: ENV_PLAN_PLACES,
        })?;
        let supply = match (args.edges, args.osrm_base_url) {
            (Some(path), _) => EdgeSupply::File(path),
            (None, Some(base_url)) => EdgeSupply::Osrm(base_url),
            (None, None) => EdgeSupply::Estimated,
        };
        Ok(Self {
            places,
            supply,
            algorithm: args.algorithm.unwrap_or_default(),
            optimize_for: args.optimize_for.unwrap_or_default(),
            depth_limit: args.depth_limit.unwrap_or(CLI_DEFAULT_DEPTH_LIMIT),
            mode: args.mode.unwrap_or_default(),
        })
    }
}

impl PlanConfig {
    fn request(&self, places: Vec<Place>) -> PlanRequest {
        PlanRequest::new(places, self.algorithm)
            .with_mode(self.mode)
            .with_optimize_for(self.optimize_for)
            .with_depth_limit(self.depth_limit)
    }

    fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::default().with_default_depth_limit(self.depth_limit)
    }
}

/// JSON document printed by `plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlanOutput {
    pub(crate) route: Option<Route>,
    pub(crate) edge_source: String,
    pub(crate) search_millis: u64,
}

impl From<PlanResponse> for PlanOutput {
    fn from(response: PlanResponse) -> Self {
        Self {
            route: response.route,
            edge_source: response.edge_source.to_string(),
            search_millis: u64::try_from(response.diagnostics.search_time.as_millis())
                .unwrap_or(u64::MAX),
        }
    }
}

fn build_provider(supply: &EdgeSupply) -> Result<Box<dyn EdgeProvider>, CliError> {
    match supply {
        EdgeSupply::File(path) => {
            let edges: Vec<RouteEdge> = read_json(path, ARG_PLAN_EDGES)?;
            log::debug!("loaded {} edges from {path}", edges.len());
            Ok(Box::new(StaticEdgeProvider::new(edges)))
        }
        EdgeSupply::Osrm(base_url) => {
            let provider = HttpEdgeProvider::with_config(HttpEdgeProviderConfig::new(
                base_url.clone(),
            ))
            .map_err(|source| CliError::BuildEdgeProvider {
                base_url: base_url.clone(),
                source,
            })?;
            Ok(Box::new(provider))
        }
        EdgeSupply::Estimated => Ok(Box::new(EstimatedEdgeProvider)),
    }
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let output = execute_plan(&config)?;
    write_json(writer, &output)
}

pub(crate) fn execute_plan(config: &PlanConfig) -> Result<PlanOutput, CliError> {
    let places: Vec<Place> = read_json(&config.places, ARG_PLAN_PLACES)?;
    let provider = build_provider(&config.supply)?;
    let planner = RoutePlanner::with_config(provider, config.planner_config());
    let response = planner.plan(&config.request(places));

    match &response.route {
        Some(route) => log::info!(
            "{} route over {} places: {} km, {} min",
            route.algorithm,
            route.places.len(),
            route.total_distance,
            route.total_duration
        ),
        None => log::info!("no route found"),
    }
    Ok(PlanOutput::from(response))
}
