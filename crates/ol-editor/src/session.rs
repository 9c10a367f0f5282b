//! The editing session: exclusive owner of the live diagram collections.

use ol_core::{BlockId, EdgeId, NetId, Phase};
use ol_diagram::cycle::would_create_cycle;
use ol_diagram::model::{
    ConverterInput, ConverterOutput, ConverterRating, Edge, LoadRating, Net, NetKind, Node,
    PassiveRating, Rating, default_net,
};
use ol_validate::{DiagramReport, validate_diagram};

use crate::history::NetHistory;

/// Partial update for a net's attributes; unset fields are left alone.
///
/// `tolerance` is doubly optional: the outer level says "change it or not",
/// the inner level is the new value (None clears the tolerance).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetPatch {
    pub kind: Option<NetKind>,
    pub voltage: Option<f64>,
    pub phase: Option<Phase>,
    pub tolerance: Option<Option<f64>>,
}

/// A single editing session over one diagram.
///
/// All operations are synchronous and complete before returning. Net-affecting
/// operations snapshot the pre-mutation state so they are individually
/// reversible; node/topology edits are outside the undo scope by design.
#[derive(Debug, Default)]
pub struct DiagramSession {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    nets: Vec<Net>,
    history: NetHistory,
}

impl DiagramSession {
    /// An empty session. The default net exists from the start.
    pub fn new() -> Self {
        Self {
            nets: vec![default_net()],
            ..Self::default()
        }
    }

    /// The seed diagram: power source -> breaker -> load.
    pub fn with_starter_diagram() -> Self {
        let mut session = Self::new();
        session.nodes = vec![
            Node::new(
                "source",
                "Power Source (Type C)",
                Some(Rating::Converter(ConverterRating {
                    input: ConverterInput {
                        v_in: 200.0,
                        phase: Phase::Single,
                        i_in_max: None,
                        p_in_max: None,
                    },
                    output: ConverterOutput {
                        v_out: 24.0,
                        phase: Phase::Dc,
                        i_out_max: None,
                        p_out_max: None,
                    },
                    eta: None,
                })),
            ),
            Node::new(
                "breaker",
                "Breaker (Type A)",
                Some(Rating::Passive(PassiveRating {
                    v_max: 250.0,
                    i_max: 20.0,
                    phase: Phase::Single,
                })),
            ),
            Node::new(
                "load",
                "Load (Type B)",
                Some(Rating::Load(LoadRating {
                    v_in: 200.0,
                    phase: Phase::Single,
                    i_in: Some(5.0),
                    p_in: None,
                })),
            ),
        ];
        session.edges = vec![
            Edge::new(EdgeId::new("e1-2"), "source", "breaker"),
            Edge::new(EdgeId::new("e2-3"), "breaker", "load"),
        ];
        session
    }

    /// Adopt collections loaded from a project document.
    pub fn from_collections(nodes: Vec<Node>, edges: Vec<Edge>, nets: Vec<Net>) -> Self {
        Self {
            nodes,
            edges,
            nets,
            history: NetHistory::new(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nets(&self) -> &[Net] {
        &self.nets
    }

    /// Re-derive findings for the current state. Called eagerly after every
    /// mutation by presentation layers; cheap enough to run on each edit.
    pub fn report(&self) -> DiagramReport {
        validate_diagram(&self.nodes, &self.edges, &self.nets)
    }

    // ---- node operations (outside the net undo scope) ----

    /// Add a node and return its generated id (`n1`, `n2`, ...).
    pub fn add_node(&mut self, label: impl Into<String>, rating: Option<Rating>) -> BlockId {
        let id = BlockId::new(next_id("n", self.nodes.iter().map(|n| n.id.as_str())));
        self.nodes.push(Node::new(id.clone(), label, rating));
        id
    }

    pub fn rename_node(&mut self, id: &BlockId, label: impl Into<String>) -> bool {
        match self.nodes.iter_mut().find(|n| &n.id == id) {
            Some(node) => {
                node.label = label.into();
                true
            }
            None => false,
        }
    }

    pub fn set_node_rating(&mut self, id: &BlockId, rating: Option<Rating>) -> bool {
        match self.nodes.iter_mut().find(|n| &n.id == id) {
            Some(node) => {
                node.rating = rating;
                true
            }
            None => false,
        }
    }

    /// Remove a node and every edge touching it.
    pub fn remove_node(&mut self, id: &BlockId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| &n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| &e.source != id && &e.target != id);
        true
    }

    /// Commit a new wire unless it would make the graph cyclic.
    ///
    /// A rejected request is silently dropped: the return value is the only
    /// diagnostic, and the diagram is left untouched for a retry with
    /// different endpoints.
    pub fn connect(&mut self, source: &BlockId, target: &BlockId) -> bool {
        if would_create_cycle(&self.edges, Some(source), Some(target)) {
            return false;
        }
        let id = EdgeId::new(next_id("e", self.edges.iter().map(|e| e.id.as_str())));
        self.edges
            .push(Edge::new(id, source.clone(), target.clone()));
        true
    }

    // ---- net operations (each records history before mutating) ----

    /// Create a net and return its id.
    ///
    /// Ids follow the `net-{count+1}` scheme; the counter skips past ids still
    /// in use so deletion cannot cause a collision. Order-dependent and
    /// single-writer only.
    pub fn add_net(&mut self) -> NetId {
        self.history.record(&self.nets, &self.edges);
        let mut n = self.nets.len() + 1;
        while self.nets.iter().any(|net| net.id.as_str() == format!("net-{n}")) {
            n += 1;
        }
        let id = NetId::new(format!("net-{n}"));
        self.nets.push(Net {
            id: id.clone(),
            kind: NetKind::Ac,
            voltage: 100.0,
            phase: Phase::Single,
            label: id.to_string(),
            tolerance: None,
        });
        id
    }

    pub fn update_net_label(&mut self, id: &NetId, label: impl Into<String>) -> bool {
        let Some(index) = self.nets.iter().position(|n| &n.id == id) else {
            return false;
        };
        self.history.record(&self.nets, &self.edges);
        self.nets[index].label = label.into();
        true
    }

    pub fn update_net_attributes(&mut self, id: &NetId, patch: &NetPatch) -> bool {
        let Some(index) = self.nets.iter().position(|n| &n.id == id) else {
            return false;
        };
        self.history.record(&self.nets, &self.edges);
        let net = &mut self.nets[index];
        if let Some(kind) = patch.kind {
            net.kind = kind;
        }
        if let Some(voltage) = patch.voltage {
            net.voltage = voltage;
        }
        if let Some(phase) = patch.phase {
            net.phase = phase;
        }
        if let Some(tolerance) = patch.tolerance {
            net.tolerance = tolerance;
        }
        true
    }

    /// Assign an edge to a net (or clear the assignment with None).
    pub fn update_edge_net(&mut self, edge_id: &EdgeId, net: Option<NetId>) -> bool {
        let Some(index) = self.edges.iter().position(|e| &e.id == edge_id) else {
            return false;
        };
        self.history.record(&self.nets, &self.edges);
        self.edges[index].net = net;
        true
    }

    /// Delete a net. Refused (false, nothing recorded) while any edge still
    /// references it.
    pub fn remove_net(&mut self, id: &NetId) -> bool {
        if !self.nets.iter().any(|n| &n.id == id) {
            return false;
        }
        if self.edges.iter().any(|e| e.net.as_ref() == Some(id)) {
            return false;
        }
        self.history.record(&self.nets, &self.edges);
        self.nets.retain(|n| &n.id != id);
        true
    }

    /// Undo the most recent net-affecting operation. False when there is
    /// nothing to undo.
    pub fn undo_net(&mut self) -> bool {
        match self.history.undo(&self.nets, &self.edges) {
            Some(snapshot) => {
                self.nets = snapshot.nets;
                self.edges = snapshot.edges;
                true
            }
            None => false,
        }
    }

    pub fn redo_net(&mut self) -> bool {
        match self.history.redo(&self.nets, &self.edges) {
            Some(snapshot) => {
                self.nets = snapshot.nets;
                self.edges = snapshot.edges;
                true
            }
            None => false,
        }
    }

    pub fn can_undo_net(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo_net(&self) -> bool {
        self.history.can_redo()
    }
}

/// Next id for a prefix: one past the highest numeric suffix in use.
fn next_id<'a, I>(prefix: &str, ids: I) -> String
where
    I: Iterator<Item = &'a str>,
{
    let mut max = 0u32;
    for id in ids {
        if let Some(num) = id.strip_prefix(prefix) {
            if let Ok(value) = num.parse::<u32>() {
                if value > max {
                    max = value;
                }
            }
        }
    }
    format!("{}{}", prefix, max + 1)
}
