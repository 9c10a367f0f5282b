//! ol-editor: the mutable editing session over a one-line diagram.
//!
//! Owns the node/edge/net collections, gates edge creation through the cycle
//! guard, and wraps every net-affecting mutation in an undo/redo snapshot.
//! The session is single-owner, synchronous state: callers needing shared
//! access must serialize calls themselves.

pub mod history;
pub mod session;

pub use history::{NetHistory, Snapshot};
pub use session::{DiagramSession, NetPatch};
