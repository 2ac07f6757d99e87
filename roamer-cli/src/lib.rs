//! Command-line interface for planning and storing roamer itineraries.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod itinerary;
mod plan;
mod sample;

pub use error::CliError;

use itinerary::{DeleteArgs, ListArgs, SaveArgs, ShowArgs};
use plan::PlanArgs;
use sample::SampleArgs;

pub(crate) const ARG_PLAN_PLACES: &str = "places";
pub(crate) const ARG_PLAN_EDGES: &str = "edges";
pub(crate) const ARG_PLAN_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_PLAN_ALGORITHM: &str = "algorithm";
pub(crate) const ARG_PLAN_OPTIMIZE_FOR: &str = "optimize-for";
pub(crate) const ARG_PLAN_DEPTH_LIMIT: &str = "depth-limit";
pub(crate) const ARG_PLAN_MODE: &str = "mode";
pub(crate) const ENV_PLAN_PLACES: &str = "ROAMER_CMDS_PLAN_PLACES";

pub(crate) const ARG_DB: &str = "db";
pub(crate) const ARG_SAVE_ROUTE: &str = "route";
pub(crate) const ARG_SAVE_NAME: &str = "name";
pub(crate) const ARG_SAVE_DESCRIPTION: &str = "description";
pub(crate) const ARG_SAVE_DATE: &str = "date";
pub(crate) const ENV_SAVE_ROUTE: &str = "ROAMER_CMDS_SAVE_ROUTE";
pub(crate) const ENV_SAVE_NAME: &str = "ROAMER_CMDS_SAVE_NAME";
pub(crate) const ENV_SAVE_DATE: &str = "ROAMER_CMDS_SAVE_DATE";
pub(crate) const ARG_ITINERARY_ID: &str = "id";

pub(crate) const ARG_SAMPLE_OUTPUT: &str = "output";
pub(crate) const ARG_SAMPLE_EDGES: &str = "edges";

/// Itinerary database used when `--db` is not given.
pub(crate) const DEFAULT_DB_PATH: &str = "roamer.db";

/// Run the roamer CLI with the current process arguments, writing command
/// output to stdout.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, an
/// input cannot be read, or the command itself fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Plan(args) => plan::run_plan(args, writer),
        Command::Save(args) => itinerary::run_save(args, writer),
        Command::List(args) => itinerary::run_list(args, writer),
        Command::Show(args) => itinerary::run_show(args, writer),
        Command::Delete(args) => itinerary::run_delete(args, writer),
        Command::Sample(args) => sample::run_sample(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "roamer",
    about = "Plan routes through places of interest and keep itineraries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find a route visiting every place in a JSON file.
    Plan(PlanArgs),
    /// Store a planned route as a dated itinerary.
    Save(SaveArgs),
    /// List stored itineraries.
    List(ListArgs),
    /// Print one stored itinerary.
    Show(ShowArgs),
    /// Remove a stored itinerary.
    Delete(DeleteArgs),
    /// Write the Paris sample dataset.
    Sample(SampleArgs),
}

/// Serialize `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: serde::Serialize>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
