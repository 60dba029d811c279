//! `mibtab` command line exporter.
//!
//! Loads one module snapshot and writes a single artifact:
//!
//! ```text
//! snapshot dir ── load_snapshot ──► Module ── export_module ──► JSON ──► stdout / --out
//!                                                                │
//!                                                  --sql-schema  └──► DDL
//! ```
//!
//! Logs go to stderr so stdout stays clean for the artifact.

mod snapshot;

use clap::Parser;
use mibtab_core::{export_module, render_ddl, ExportError, ExportOptions};
use snapshot::SnapshotError;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(
    name = "mibtab",
    about = "Export SNMP MIB modules as node dumps, table schemas or foreign table DDL",
    version
)]
struct Cli {
    /// Directory holding module snapshots
    #[arg(long, default_value = ".")]
    mib_dir: PathBuf,

    /// Name of the module to export
    #[arg(long)]
    module: String,

    /// Reconstruct conceptual tables instead of dumping raw nodes
    #[arg(long)]
    dump_tables: bool,

    /// Scalar handling in table mode: none, separate, grouped or all
    #[arg(long, default_value = "none")]
    scalar_mode: String,

    /// OID prefix depth used by the grouped scalar mode
    #[arg(long, default_value = "10")]
    group_depth: usize,

    /// Render CREATE FOREIGN TABLE statements instead of JSON (implies --dump-tables)
    #[arg(long)]
    sql_schema: bool,

    /// Write the artifact to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log verbosity: error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    verbosity: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    setup_logging(&cli.verbosity);

    let path = snapshot::module_path(&cli.mib_dir, &cli.module);
    let module = snapshot::load_snapshot(&path)?;
    info!(
        "loaded {} with {} nodes from {}",
        module.name,
        module.nodes.len(),
        path.display()
    );

    let options = ExportOptions {
        dump_tables: cli.dump_tables || cli.sql_schema,
        scalar_mode: cli.scalar_mode.clone(),
        group_depth: cli.group_depth,
    };

    let export = export_module(&module, &options)?;
    let json = export.to_json()?;
    let artifact = if cli.sql_schema { render_ddl(&json)? } else { json };

    match &cli.out {
        Some(path) => {
            fs::write(path, &artifact)?;
            info!("wrote {} bytes to {}", artifact.len(), path.display());
        }
        None => io::stdout().write_all(artifact.as_bytes())?,
    }

    Ok(())
}

fn setup_logging(verbosity: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
