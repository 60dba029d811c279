//! Module container consumed by the exporters.

use crate::model::Node;
use serde::{Deserialize, Serialize};

/// A resolved MIB module: the module name plus its nodes in definition order.
///
/// This is also the wire shape of a module snapshot, so a raw node dump and
/// the input it was produced from carry the same keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Module name.
    #[serde(rename = "module")]
    pub name: String,
    /// Nodes in source definition order.
    pub nodes: Vec<Node>,
}

impl Module {
    /// Create an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    /// Add a node to this module.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }
}
