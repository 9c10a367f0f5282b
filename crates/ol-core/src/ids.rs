//! String-keyed identifiers for diagram objects.
//!
//! Diagram ids are user-visible strings ("source", "net-1", "e2-3"): they come
//! from the persisted document and from the editor's id generators, so they are
//! stored as owned strings rather than compact indices.

use core::fmt;
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a diagram block (component node).
    BlockId
);
string_id!(
    /// Identifier of an electrical net.
    NetId
);
string_id!(
    /// Identifier of a port on a block.
    PortId
);
string_id!(
    /// Identifier of a directed wire between two blocks.
    EdgeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip() {
        let id = NetId::new("net-1");
        assert_eq!(id.as_str(), "net-1");
        assert_eq!(id.to_string(), "net-1");
        assert_eq!(NetId::from("net-1"), id);
    }

    #[test]
    fn serde_transparent() {
        let id = BlockId::new("breaker");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"breaker\"");
        let back: BlockId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
