//! Foreign-table DDL rendering from the JSON table dump.
//!
//! The renderer deliberately consumes the serialized JSON text instead of
//! the in-memory table model: anything producing the same JSON contract can
//! feed it, and the contract stays the only coupling point. Column types
//! are emitted verbatim; they are already canonical in the contract.

use crate::error::Result;
use crate::schema::TableDef;
use serde::Deserialize;
use std::fmt::Write;

const INDENT: &str = "    ";

/// The part of the JSON artifact the renderer depends on.
#[derive(Deserialize)]
struct SchemaPayload {
    tables: Vec<TableDef>,
}

/// Render `CREATE FOREIGN TABLE` statements from a JSON table dump.
///
/// Each table becomes one statement; tables and columns keep the order of
/// the JSON input. Descriptions are attached as `ANNOTATION` options with
/// single quotes doubled and newlines collapsed to spaces.
///
/// # Errors
///
/// Returns [`ExportError::Json`](crate::ExportError::Json) if the input
/// does not carry a `tables` array matching the schema contract.
pub fn render_ddl(json: &str) -> Result<String> {
    let payload: SchemaPayload = serde_json::from_str(json)?;

    let mut out = String::new();
    for table in &payload.tables {
        // write! to String is infallible
        let _ = write!(out, "CREATE FOREIGN TABLE {}\n(\n", table.name);

        for (i, column) in table.columns.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            let _ = write!(
                out,
                "{INDENT}{} {} OPTIONS (snmp_oid '{}'",
                column.name, column.canonical_type, column.oid
            );
            if let Some(description) = non_empty(&column.description) {
                let _ = write!(out, ", ANNOTATION '{}'", escape_annotation(description));
            }
            out.push(')');
        }

        out.push_str("\n)\nOPTIONS (updatable 'false', snmp_type 'full_table'");
        if let Some(description) = non_empty(&table.description) {
            let _ = write!(out, ", ANNOTATION '{}'", escape_annotation(description));
        }
        out.push_str(");\n\n");
    }

    Ok(out)
}

/// Escape a description for a single-quoted SQL literal: quotes are doubled
/// and newlines become spaces.
fn escape_annotation(text: &str) -> String {
    text.replace('\'', "''").replace('\n', " ")
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}
