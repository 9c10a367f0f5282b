//! ol-core: stable foundation for oneline.
//!
//! Contains:
//! - ids (string-keyed identifiers for diagram objects)
//! - phase (closed phase enumeration: DC / single / three)
//! - numeric (input coercion + fixed-point helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod phase;

// Re-exports: nice ergonomics for downstream crates
pub use error::{OlError, OlResult};
pub use ids::*;
pub use numeric::*;
pub use phase::Phase;
