//! Resolved module model.
//!
//! The model is the input side of the exporter. It sits downstream of the
//! MIB parser:
//!
//! ```text
//! MIB sources → parser/resolver → module snapshot → [Module] → exporters
//! ```
//!
//! Nodes are flat: table/row/column hierarchy is recovered from OID prefix
//! containment, never from parent/child pointers.

mod module;
mod node;
mod oid;

pub use module::Module;
pub use node::{Node, NodeKind};
pub use oid::Oid;

/// serde skip predicate for description fields: absent and empty text are
/// both left out of artifacts.
pub(crate) fn omit_empty_text(text: &Option<String>) -> bool {
    match text {
        Some(t) => t.is_empty(),
        None => true,
    }
}
