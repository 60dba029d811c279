//! mibtab-core: pure MIB module export library.
//!
//! Turns a resolved MIB module (a flat list of typed OID nodes) into either
//! a raw JSON node dump or a reconstructed relational schema, and renders
//! the schema as `CREATE FOREIGN TABLE` DDL. The crate is IO-free: callers
//! hand it an in-memory [`Module`] and get strings back.
//!
//! ```text
//! Module ── export_module ──► ModuleExport ── to_json ──► JSON ── render_ddl ──► DDL
//! ```
//!
//! Parsing MIB definitions is out of scope; an upstream resolver produces
//! the module snapshots this crate consumes.

pub mod ddl;
pub mod error;
pub mod model;
pub mod schema;
pub mod typemap;

pub use ddl::render_ddl;
pub use error::{ExportError, Result};
pub use model::{Module, Node, NodeKind, Oid};
pub use schema::{export_module, ColumnDef, ExportOptions, ModuleExport, ScalarMode, TableDef};
pub use typemap::canonical_type;
