//! Error types emitted by the roamer CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use roamer_core::{RouteError, SqliteItineraryStoreError};
use roamer_data::routing::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the roamer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} file {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An input file did not hold the expected JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A route file decoded but does not describe a valid route.
    #[error("route in {path:?} is invalid: {source}")]
    InvalidRoute {
        path: Utf8PathBuf,
        #[source]
        source: RouteError,
    },
    /// Constructing the OSRM edge supplier failed.
    #[error("failed to build edge supplier for {base_url:?}: {source}")]
    BuildEdgeProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// The itinerary database could not be prepared.
    #[error("failed to prepare itinerary database directory for {path:?}: {source}")]
    PrepareDatabase {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading or writing the itinerary database failed.
    #[error(transparent)]
    Store(#[from] SqliteItineraryStoreError),
    /// No itinerary has the requested id.
    #[error("no itinerary with id '{id}'")]
    ItineraryNotFound { id: String },
    /// Writing an output file failed.
    #[error("failed to write {path:?}: {source}")]
    WriteOutputFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
