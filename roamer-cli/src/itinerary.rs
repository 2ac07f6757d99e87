//! Itinerary commands: `save`, `list`, `show` and `delete`.
//!
//! Every command opens the SQLite itinerary database named by `--db`,
//! defaulting to `roamer.db` in the working directory.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roamer_core::{ItineraryStore, NewItinerary, Route, SqliteItineraryStore};
use serde::{Deserialize, Serialize};

use crate::fs::{ensure_parent_dir, read_json};
use crate::{
    ARG_DB, ARG_ITINERARY_ID, ARG_SAVE_DATE, ARG_SAVE_DESCRIPTION, ARG_SAVE_NAME, ARG_SAVE_ROUTE,
    CliError, DEFAULT_DB_PATH, ENV_SAVE_DATE, ENV_SAVE_NAME, ENV_SAVE_ROUTE, write_json,
};

/// CLI arguments for the `save` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "save",
    long_about = "Store a route produced by `roamer plan` as a named, dated \
                 itinerary. The route file may be the plan output's `route` \
                 object saved on its own.",
    about = "Save a route as an itinerary"
)]
#[ortho_config(prefix = "ROAMER")]
pub(crate) struct SaveArgs {
    /// Path to a JSON route.
    #[arg(long = ARG_SAVE_ROUTE, value_name = "path")]
    #[serde(default)]
    pub(crate) route: Option<Utf8PathBuf>,
    /// Itinerary name.
    #[arg(long = ARG_SAVE_NAME, value_name = "text")]
    #[serde(default)]
    pub(crate) name: Option<String>,
    /// Free-form description.
    #[arg(long = ARG_SAVE_DESCRIPTION, value_name = "text")]
    #[serde(default)]
    pub(crate) description: Option<String>,
    /// Planned day, as YYYY-MM-DD.
    #[arg(long = ARG_SAVE_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<NaiveDate>,
    /// Path to the itinerary database.
    #[arg(long = ARG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) db: Option<Utf8PathBuf>,
}

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "list", about = "List stored itineraries")]
#[ortho_config(prefix = "ROAMER")]
pub(crate) struct ListArgs {
    /// Path to the itinerary database.
    #[arg(long = ARG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) db: Option<Utf8PathBuf>,
}

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(name = "show", about = "Print a stored itinerary")]
pub(crate) struct ShowArgs {
    /// Itinerary id.
    #[arg(value_name = ARG_ITINERARY_ID)]
    pub(crate) id: String,
    /// Path to the itinerary database.
    #[arg(long = ARG_DB, value_name = "path")]
    pub(crate) db: Option<Utf8PathBuf>,
}

/// CLI arguments for the `delete` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(name = "delete", about = "Delete a stored itinerary")]
pub(crate) struct DeleteArgs {
    /// Itinerary id.
    #[arg(value_name = ARG_ITINERARY_ID)]
    pub(crate) id: String,
    /// Path to the itinerary database.
    #[arg(long = ARG_DB, value_name = "path")]
    pub(crate) db: Option<Utf8PathBuf>,
}

/// Resolved `save` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SaveConfig {
    pub(crate) route: Utf8PathBuf,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) date: NaiveDate,
    pub(crate) db: Utf8PathBuf,
}

impl TryFrom<SaveArgs> for SaveConfig {
    type Error = CliError;

    fn try_from(args: SaveArgs) -> Result<Self, Self::Error> {
        let route = args.route.ok_or(CliError::MissingArgument {
            field: ARG_SAVE_ROUTE,
            env: ENV_SAVE_ROUTE,
        })?;
        let name = args.name.ok_or(CliError::MissingArgument {
            field: ARG_SAVE_NAME,
            env: ENV_SAVE_NAME,
        })?;
        let date = args.date.ok_or(CliError::MissingArgument {
            field: ARG_SAVE_DATE,
            env: ENV_SAVE_DATE,
        })?;
        Ok(Self {
            route,
            name,
            description: args.description.unwrap_or_default(),
            date,
            db: db_path(args.db),
        })
    }
}

fn db_path(db: Option<Utf8PathBuf>) -> Utf8PathBuf {
    db.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DB_PATH))
}

fn open_store(path: &Utf8Path) -> Result<SqliteItineraryStore, CliError> {
    ensure_parent_dir(path).map_err(|source| CliError::PrepareDatabase {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SqliteItineraryStore::open(path.as_std_path())?)
}

/// Load a route file and re-check it, since it may have been edited by hand.
fn load_route(path: &Utf8Path) -> Result<Route, CliError> {
    let route: Route = read_json(path, ARG_SAVE_ROUTE)?;
    Route::from_path(route.places, route.edges, route.algorithm).map_err(|source| {
        CliError::InvalidRoute {
            path: path.to_path_buf(),
            source,
        }
    })
}

pub(crate) fn run_save(args: SaveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = SaveConfig::try_from(merged)?;
    let route = load_route(&config.route)?;
    let draft = NewItinerary::new(config.name, config.date, route).with_description(config.description);

    let mut store = open_store(&config.db)?;
    let saved = store.save(draft)?;
    log::info!("saved itinerary {} to {}", saved.id, config.db);
    write_json(writer, &saved)
}

pub(crate) fn run_list(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let store = open_store(&db_path(merged.db))?;
    write_json(writer, &store.list()?)
}

pub(crate) fn run_show(args: ShowArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let store = open_store(&db_path(args.db))?;
    let itinerary = store
        .get(&args.id)?
        .ok_or(CliError::ItineraryNotFound { id: args.id })?;
    write_json(writer, &itinerary)
}

pub(crate) fn run_delete(args: DeleteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let mut store = open_store(&db_path(args.db))?;
    if !store.delete(&args.id)? {
        return Err(CliError::ItineraryNotFound { id: args.id });
    }
    log::info!("deleted itinerary {}", args.id);
    writeln!(writer, "deleted {}", args.id).map_err(CliError::WriteOutput)
}
