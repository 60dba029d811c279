//! Scalar emission as synthetic single-purpose tables.
//!
//! Scalars have no table/row structure of their own, so each mode invents
//! one: a table per scalar (`separate`), a table per truncated OID prefix
//! (`grouped`), or one table for the whole module (`all`). Buckets are kept
//! in a `BTreeMap`, so grouped output is ordered by prefix string.

use super::tables::{ColumnDef, TableDef};
use crate::model::{Module, Node, NodeKind};
use std::collections::BTreeMap;
use tracing::debug;

/// Bucket key under which `all` mode collapses every scalar.
const ALL_SCALARS_KEY: &str = "all";

/// One single-column table per scalar, in definition order.
pub(crate) fn separate_tables(module: &Module) -> Vec<TableDef> {
    scalar_nodes(module)
        .filter_map(|node| {
            let column = ColumnDef::from_node(node)?;
            Some(TableDef {
                name: format!("scalar_{}", node.name),
                description: node.description.clone(),
                oid_prefix: node.oid.to_dotted(),
                columns: vec![column],
                source_oid: Some(node.oid.to_dotted()),
                source_module: Some(module.name.clone()),
            })
        })
        .collect()
}

/// Scalars bucketed by their OID truncated to `group_depth` arcs, one table
/// per bucket, ordered by bucket prefix.
pub(crate) fn grouped_tables(module: &Module, group_depth: usize) -> Vec<TableDef> {
    let buckets = bucket_by(module, |node| node.oid.truncated(group_depth).to_dotted());
    debug!(
        "grouped scalars of {} into {} buckets at depth {}",
        module.name,
        buckets.len(),
        group_depth
    );

    buckets
        .into_iter()
        .map(|(prefix, columns)| TableDef {
            name: format!("scalars_{}", prefix.replace('.', "_")),
            description: Some(format!("Scalar objects grouped under OID prefix {prefix}")),
            oid_prefix: prefix.clone(),
            columns,
            source_oid: Some(prefix),
            source_module: Some(module.name.clone()),
        })
        .collect()
}

/// Every scalar of the module in one table. Yields nothing when the module
/// has no typed scalars.
pub(crate) fn all_scalars_table(module: &Module) -> Vec<TableDef> {
    let mut buckets = bucket_by(module, |_| String::from(ALL_SCALARS_KEY));
    let Some(columns) = buckets.remove(ALL_SCALARS_KEY) else {
        return Vec::new();
    };

    vec![TableDef {
        name: String::from("scalars"),
        description: Some(format!("All scalar objects of {}", module.name)),
        oid_prefix: String::new(),
        columns,
        source_oid: None,
        source_module: Some(module.name.clone()),
    }]
}

/// Bucket typed scalars by an arbitrary key. Columns keep definition order
/// within each bucket.
fn bucket_by<F>(module: &Module, key_of: F) -> BTreeMap<String, Vec<ColumnDef>>
where
    F: Fn(&Node) -> String,
{
    let mut buckets: BTreeMap<String, Vec<ColumnDef>> = BTreeMap::new();
    for node in scalar_nodes(module) {
        if let Some(column) = ColumnDef::from_node(node) {
            buckets.entry(key_of(node)).or_default().push(column);
        }
    }
    buckets
}

fn scalar_nodes(module: &Module) -> impl Iterator<Item = &Node> {
    module.nodes.iter().filter(|n| n.kind == NodeKind::Scalar)
}
