//! Schema reconstruction from resolved modules.
//!
//! One entry point, [`export_module`], turns a [`Module`] into the export
//! artifact: either the raw node list or a set of reconstructed table
//! definitions, selected by [`ExportOptions`]. The artifact serializes to
//! the JSON contract consumed by the DDL renderer and other downstreams.

mod scalars;
mod tables;

pub use tables::{ColumnDef, TableDef};

use crate::error::{ExportError, Result};
use crate::model::{Module, Node};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// How scalar objects are emitted when table reconstruction is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScalarMode {
    /// No reconstruction: dump raw nodes.
    #[default]
    None,
    /// One single-column table per scalar.
    Separate,
    /// Scalars bucketed by truncated OID prefix.
    Grouped,
    /// Every scalar in one table.
    All,
}

impl FromStr for ScalarMode {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "separate" => Ok(Self::Separate),
            "grouped" => Ok(Self::Grouped),
            "all" => Ok(Self::All),
            other => Err(ExportError::InvalidScalarMode(other.to_string())),
        }
    }
}

/// Options controlling an export.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Reconstruct SNMP table definitions instead of dumping raw nodes.
    pub dump_tables: bool,
    /// Scalar emission mode: `none`, `separate`, `grouped` or `all`.
    ///
    /// Kept as the raw string so validation happens inside
    /// [`export_module`], before any work is done.
    pub scalar_mode: String,
    /// Leading OID arcs forming the bucket key in `grouped` mode.
    /// Zero disables truncation.
    pub group_depth: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dump_tables: false,
            scalar_mode: String::from("none"),
            group_depth: 10,
        }
    }
}

/// The export artifact: the module name plus either raw nodes or
/// reconstructed tables.
///
/// Serializes as a single JSON object carrying a `nodes` or a `tables` key,
/// never both.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum ModuleExport {
    /// Raw node dump.
    Nodes {
        /// Module name.
        module: String,
        /// Every node of the module, in definition order.
        nodes: Vec<Node>,
    },
    /// Reconstructed table definitions.
    Tables {
        /// Module name.
        module: String,
        /// Table definitions in emission order.
        tables: Vec<TableDef>,
    },
}

impl ModuleExport {
    /// Render as pretty-printed JSON (two-space indent).
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Export a module according to the given options.
///
/// The scalar mode is validated up front, so an invalid mode never
/// produces partial output. With `dump_tables` set, table reconstruction
/// runs and the scalar mode is otherwise ignored.
///
/// # Errors
///
/// Returns [`ExportError::InvalidScalarMode`] if `options.scalar_mode` is
/// not one of `none`, `separate`, `grouped`, `all`.
pub fn export_module(module: &Module, options: &ExportOptions) -> Result<ModuleExport> {
    let mode: ScalarMode = options.scalar_mode.parse()?;

    if options.dump_tables {
        let tables = tables::extract_tables(module);
        debug!("reconstructed {} table definitions from {}", tables.len(), module.name);
        return Ok(ModuleExport::Tables {
            module: module.name.clone(),
            tables,
        });
    }

    let export = match mode {
        ScalarMode::None => ModuleExport::Nodes {
            module: module.name.clone(),
            nodes: module.nodes.clone(),
        },
        ScalarMode::Separate => ModuleExport::Tables {
            module: module.name.clone(),
            tables: scalars::separate_tables(module),
        },
        ScalarMode::Grouped => ModuleExport::Tables {
            module: module.name.clone(),
            tables: scalars::grouped_tables(module, options.group_depth),
        },
        ScalarMode::All => ModuleExport::Tables {
            module: module.name.clone(),
            tables: scalars::all_scalars_table(module),
        },
    };
    Ok(export)
}
