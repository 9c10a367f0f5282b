//! ol-diagram: data model and structural rules for the one-line diagram.
//!
//! Provides:
//! - Core model types (Node, Rating, Net, Edge, Port)
//! - Rating defaults and normalization
//! - Cycle prevention for the wiring graph
//!
//! # Example
//!
//! ```
//! use ol_diagram::{cycle, Edge};
//! use ol_core::{BlockId, EdgeId};
//!
//! let edges = vec![Edge::new(EdgeId::new("e1"), "a", "b")];
//! let a = BlockId::new("a");
//! let b = BlockId::new("b");
//! // b -> a would close a loop over the existing a -> b wire
//! assert!(cycle::would_create_cycle(&edges, Some(&b), Some(&a)));
//! assert!(!cycle::would_create_cycle(&edges, Some(&a), Some(&b)));
//! ```

pub mod cycle;
pub mod model;
pub mod rating;

// Re-exports for ergonomics
pub use model::{
    BlockType, ConverterInput, ConverterOutput, ConverterRating, Edge, LoadRating, Net, NetKind,
    Node, PassiveRating, Port, PortDirection, PortRole, Rating, default_net,
};
pub use rating::{PartialConverterRating, default_rating, ensure_converter_rating};
