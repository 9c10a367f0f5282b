//! Net edit history: a linear undo/redo log over nets and edges.
//!
//! Node topology is deliberately outside this history's scope; only net
//! definitions and edge-to-net assignments are snapshotted. Snapshots are
//! structurally independent copies, so later mutation of the live collections
//! cannot corrupt stored entries.

use ol_diagram::model::{Edge, Net};

/// One immutable copy of the net-relevant state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub nets: Vec<Net>,
    pub edges: Vec<Edge>,
}

impl Snapshot {
    fn capture(nets: &[Net], edges: &[Edge]) -> Self {
        Self {
            nets: nets.to_vec(),
            edges: edges.to_vec(),
        }
    }
}

/// Past/future snapshot stacks with standard linear-history semantics:
/// recording a new mutation discards the redo branch.
#[derive(Debug, Default)]
pub struct NetHistory {
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
}

impl NetHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the current (pre-mutation) state onto the past stack.
    ///
    /// Callers invoke this *before* applying their change, so the snapshot
    /// always represents the state an undo should restore.
    pub fn record(&mut self, nets: &[Net], edges: &[Edge]) {
        self.past.push(Snapshot::capture(nets, edges));
        self.future.clear();
    }

    /// Pop the most recent snapshot, saving the current state for redo.
    /// Returns the snapshot for the caller to apply, or None when there is
    /// nothing to undo.
    pub fn undo(&mut self, nets: &[Net], edges: &[Edge]) -> Option<Snapshot> {
        let last = self.past.pop()?;
        self.future.push(Snapshot::capture(nets, edges));
        Some(last)
    }

    /// Mirror of [`undo`](Self::undo) over the future stack.
    pub fn redo(&mut self, nets: &[Net], edges: &[Edge]) -> Option<Snapshot> {
        let next = self.future.pop()?;
        self.past.push(Snapshot::capture(nets, edges));
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_core::{EdgeId, NetId, Phase};
    use ol_diagram::model::NetKind;

    fn net(id: &str, voltage: f64) -> Net {
        Net {
            id: NetId::new(id),
            kind: NetKind::Ac,
            voltage,
            phase: Phase::Single,
            label: id.to_string(),
            tolerance: None,
        }
    }

    #[test]
    fn empty_history_has_nothing_to_apply() {
        let mut history = NetHistory::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(&[], &[]), None);
        assert_eq!(history.redo(&[], &[]), None);
    }

    #[test]
    fn record_then_undo_restores_recorded_state() {
        let mut history = NetHistory::new();
        let before = vec![net("net-1", 200.0)];
        history.record(&before, &[]);

        let after = vec![net("net-1", 400.0)];
        let snapshot = history.undo(&after, &[]).unwrap();
        assert_eq!(snapshot.nets, before);
        assert!(history.can_redo());
        assert!(!history.can_undo());

        let redone = history.redo(&before, &[]).unwrap();
        assert_eq!(redone.nets, after);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_clears_redo_branch() {
        let mut history = NetHistory::new();
        history.record(&[net("net-1", 200.0)], &[]);
        history.undo(&[net("net-1", 300.0)], &[]).unwrap();
        assert!(history.can_redo());

        history.record(&[net("net-1", 500.0)], &[]);
        assert!(!history.can_redo());
        assert!(history.can_undo());
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let mut history = NetHistory::new();
        let mut nets = vec![net("net-1", 200.0)];
        let edges = vec![Edge::new(EdgeId::new("e1"), "a", "b")];
        history.record(&nets, &edges);

        // mutate the live collection after recording
        nets[0].voltage = 999.0;
        let snapshot = history.undo(&nets, &edges).unwrap();
        assert_eq!(snapshot.nets[0].voltage, 200.0);
    }
}
