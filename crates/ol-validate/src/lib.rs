//! ol-validate: compatibility validation for the one-line diagram.
//!
//! Pure functions from (nodes, edges, nets) to findings and derived totals.
//! Incomplete data yields `warn` findings and absent contributions, never
//! panics or `Err`; the diagram stays editable no matter how many findings
//! accumulate.

pub mod finding;
pub mod rules;
pub mod summary;

// Re-exports for ergonomics
pub use finding::{Finding, Level};
pub use rules::{
    BlockCheck, NetCheck, RatedBlock, check_block_on_net, check_net, is_tolerance_valid,
    is_voltage_within_tolerance,
};
pub use summary::{DiagramReport, ValidationStats, validate_diagram};
