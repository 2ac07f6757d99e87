//! `sample` command: export the Paris sample dataset.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use roamer_data::sample::{paris_edges, paris_places};
use serde::Serialize;

use crate::fs::write_utf8_file;
use crate::{ARG_SAMPLE_EDGES, ARG_SAMPLE_OUTPUT, CliError, write_json};

/// CLI arguments for the `sample` subcommand.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "sample",
    long_about = "Write the eight Paris sample landmarks as a JSON array \
                 suitable for `roamer plan`, and optionally their \
                 hand-measured driving edges for `--edges`.",
    about = "Export the Paris sample dataset"
)]
pub(crate) struct SampleArgs {
    /// Write places here instead of stdout.
    #[arg(long = ARG_SAMPLE_OUTPUT, value_name = "path")]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Also write the sample edges to this path.
    #[arg(long = ARG_SAMPLE_EDGES, value_name = "path")]
    pub(crate) edges: Option<Utf8PathBuf>,
}

fn write_json_file<T: Serialize>(path: &Utf8Path, value: &T) -> Result<(), CliError> {
    let mut payload = serde_json::to_vec_pretty(value).map_err(CliError::SerializeOutput)?;
    payload.push(b'\n');
    write_utf8_file(path, &payload).map_err(|source| CliError::WriteOutputFile {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn run_sample(args: SampleArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let places = paris_places();
    match &args.output {
        Some(path) => write_json_file(path, &places)?,
        None => write_json(writer, &places)?,
    }
    if let Some(path) = &args.edges {
        write_json_file(path, &paris_edges())?;
    }
    Ok(())
}
