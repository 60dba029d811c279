//! Node records of a resolved module.

use crate::model::Oid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Node kind inferred from definition context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Internal node (no definition, just OID path).
    #[default]
    Internal,
    /// OBJECT-IDENTITY, MODULE-IDENTITY, or value assignment.
    Node,
    /// OBJECT-TYPE not in a table.
    Scalar,
    /// SYNTAX is SEQUENCE OF.
    Table,
    /// Has INDEX or AUGMENTS clause.
    Row,
    /// Parent is Row (column object).
    Column,
    /// NOTIFICATION-TYPE or TRAP-TYPE.
    Notification,
    /// OBJECT-GROUP or NOTIFICATION-GROUP.
    Group,
    /// MODULE-COMPLIANCE.
    Compliance,
    /// AGENT-CAPABILITIES.
    Capabilities,
}

impl NodeKind {
    /// Get the wire name for downstream consumers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Node => "node",
            Self::Scalar => "scalar",
            Self::Table => "table",
            Self::Row => "row",
            Self::Column => "column",
            Self::Notification => "notification",
            Self::Group => "group",
            Self::Compliance => "compliance",
            Self::Capabilities => "capabilities",
        }
    }

    /// Convert from a wire name. Unrecognized names map to `Internal`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "node" => Self::Node,
            "scalar" => Self::Scalar,
            "table" => Self::Table,
            "row" => Self::Row,
            "column" => Self::Column,
            "notification" => Self::Notification,
            "group" => Self::Group,
            "compliance" => Self::Compliance,
            "capabilities" => Self::Capabilities,
            _ => Self::Internal,
        }
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// A resolved node: one named OID assignment within a module.
///
/// Nodes arrive fully resolved from the upstream MIB parser; this crate
/// never mutates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Object name/label.
    pub name: String,
    /// Full numeric OID.
    pub oid: Oid,
    /// Inferred node kind.
    pub kind: NodeKind,
    /// Declared SMI type name (columns and scalars).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    /// DESCRIPTION text.
    #[serde(default, skip_serializing_if = "crate::model::omit_empty_text")]
    pub description: Option<String>,
}

impl Node {
    /// Create a node without syntax or description.
    #[must_use]
    pub fn new(name: impl Into<String>, oid: Oid, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            oid,
            kind,
            syntax: None,
            description: None,
        }
    }

    /// Attach a declared SMI type name.
    #[must_use]
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
