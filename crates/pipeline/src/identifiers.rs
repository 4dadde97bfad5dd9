//! Newtype domain identifiers.
//!
//! Node identifiers arrive from callers as plain strings; wrapping them keeps
//! them from being confused with other string data (log messages, error text)
//! as they move through validation and cycle detection.

use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identifiers: caller-supplied
// ---------------------------------------------------------------------------

/// Identifies a node within a single submitted pipeline.
///
/// The value is opaque: any string, including the empty string, is a valid
/// identifier. Uniqueness is only meaningful within one request; duplicates in
/// the submitted node list collapse to a single node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a new identifier from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single inspection request.
///
/// Generated fresh for every request received by the HTTP boundary and
/// attached to its tracing span so all events from one request can be
/// correlated. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generates a new random request identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
