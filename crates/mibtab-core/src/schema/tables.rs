//! SNMP table reconstruction from OID prefix containment.
//!
//! A conceptual table in SMI is three layers of OID assignments: the table
//! node, one row (entry) node directly under it, and one column node per
//! field under the row. None of that containment is explicit in a flat node
//! list, so it is recovered here purely from proper-prefix tests.

use crate::model::{Module, Node, NodeKind, Oid};
use crate::typemap::canonical_type;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A reconstructed table definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// Table name.
    #[serde(rename = "table")]
    pub name: String,
    /// Table description.
    #[serde(default, skip_serializing_if = "crate::model::omit_empty_text")]
    pub description: Option<String>,
    /// OID prefix shared by every value of the table. Synthetic scalar
    /// tables may carry a truncated or empty prefix.
    #[serde(rename = "snmp_oid_prefix")]
    pub oid_prefix: String,
    /// Columns in discovery order.
    pub columns: Vec<ColumnDef>,
    /// OID of the source table node (or the grouping prefix).
    #[serde(rename = "oid", default, skip_serializing_if = "Option::is_none")]
    pub source_oid: Option<String>,
    /// Module the table was reconstructed from.
    #[serde(rename = "module", default, skip_serializing_if = "Option::is_none")]
    pub source_module: Option<String>,
}

/// A single typed column of a reconstructed table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Full OID of the column object.
    pub oid: Oid,
    /// Canonical output type (already mapped from the declared syntax).
    #[serde(rename = "type")]
    pub canonical_type: String,
    /// Column description.
    #[serde(default, skip_serializing_if = "crate::model::omit_empty_text")]
    pub description: Option<String>,
}

impl ColumnDef {
    /// Build a column from a node, mapping its declared syntax to the
    /// canonical type. Nodes without a syntax yield no column.
    pub(crate) fn from_node(node: &Node) -> Option<Self> {
        let syntax = node.syntax.as_deref()?;
        Some(Self {
            name: node.name.clone(),
            oid: node.oid.clone(),
            canonical_type: canonical_type(syntax).to_string(),
            description: node.description.clone(),
        })
    }
}

/// Reconstruct table definitions from table/row/column containment.
///
/// Tables without a discoverable row, or without any typed column under
/// that row, are dropped. When several rows claim the same table prefix,
/// the first in definition order wins.
pub(crate) fn extract_tables(module: &Module) -> Vec<TableDef> {
    let mut tables = Vec::new();

    for table in module.nodes.iter().filter(|n| n.kind == NodeKind::Table) {
        let Some(row) = module
            .nodes
            .iter()
            .find(|n| n.kind == NodeKind::Row && table.oid.is_strict_prefix_of(&n.oid))
        else {
            debug!("table {} has no row entry, dropping", table.name);
            continue;
        };

        let columns: Vec<ColumnDef> = module
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Column && row.oid.is_strict_prefix_of(&n.oid))
            .filter_map(ColumnDef::from_node)
            .collect();

        if columns.is_empty() {
            debug!("table {} has no typed columns, dropping", table.name);
            continue;
        }

        tables.push(TableDef {
            name: table.name.clone(),
            description: table.description.clone(),
            oid_prefix: table.oid.to_dotted(),
            columns,
            source_oid: Some(table.oid.to_dotted()),
            source_module: Some(module.name.clone()),
        });
    }

    tables
}
