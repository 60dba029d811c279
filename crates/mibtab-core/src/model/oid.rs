//! OID (Object Identifier) representation.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write};

/// A fully-resolved numeric OID.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid {
    arcs: Vec<u32>,
}

impl Oid {
    /// Create a new OID from a vector of arcs.
    #[must_use]
    pub fn new(arcs: Vec<u32>) -> Self {
        Self { arcs }
    }

    /// Parse an OID from dotted notation (e.g., "1.3.6.1.2.1").
    #[must_use]
    pub fn from_dotted(s: &str) -> Option<Self> {
        if s.is_empty() {
            return Some(Self::new(Vec::new()));
        }
        let arcs: Result<Vec<u32>, _> = s.split('.').map(|p| p.parse()).collect();
        arcs.ok().map(Self::new)
    }

    /// Convert to dotted notation string.
    #[must_use]
    pub fn to_dotted(&self) -> String {
        if self.arcs.is_empty() {
            return String::new();
        }
        // Estimate capacity: avg ~3 chars per arc + 1 for dots
        let mut result = String::with_capacity(self.arcs.len() * 4);
        let mut iter = self.arcs.iter();
        if let Some(first) = iter.next() {
            // write! to String is infallible
            let _ = write!(result, "{first}");
            for arc in iter {
                result.push('.');
                let _ = write!(result, "{arc}");
            }
        }
        result
    }

    /// Check if this OID is a proper prefix of another.
    ///
    /// An OID is never a proper prefix of itself.
    #[must_use]
    pub fn is_strict_prefix_of(&self, other: &Self) -> bool {
        self.arcs.len() < other.arcs.len() && other.arcs.starts_with(&self.arcs)
    }

    /// Return the OID limited to its first `depth` arcs.
    ///
    /// A depth of zero or a depth past the end returns the OID unchanged.
    #[must_use]
    pub fn truncated(&self, depth: usize) -> Self {
        if depth == 0 || depth >= self.arcs.len() {
            return self.clone();
        }
        Self::new(self.arcs[..depth].to_vec())
    }

    /// Get the number of arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Get the arcs as a slice.
    #[must_use]
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dotted())
    }
}

impl Serialize for Oid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_dotted())
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_dotted(&s).ok_or_else(|| D::Error::custom(format!("invalid OID: {s}")))
    }
}
