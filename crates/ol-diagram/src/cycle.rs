//! Cycle prevention for the wiring graph.
//!
//! The wiring graph must stay acyclic at all times. Rather than detecting
//! cycles after the fact, the editing layer asks [`would_create_cycle`] before
//! committing a new edge; a rejected edge is simply dropped.

use std::collections::{HashMap, HashSet};

use ol_core::BlockId;

use crate::model::Edge;

/// True when a directed path `start -> goal` exists.
///
/// Iterative depth-first traversal with a visited set; the input edges are
/// never mutated and list order does not affect the result.
pub fn has_path(edges: &[Edge], start: &BlockId, goal: &BlockId) -> bool {
    let pairs: Vec<(&BlockId, &BlockId)> = edges.iter().map(|e| (&e.source, &e.target)).collect();
    reachable(&pairs, start, goal)
}

/// Would committing the edge `source -> target` make the graph cyclic?
///
/// Returns true (reject) when either endpoint is absent, when the edge is a
/// self-loop, or when a path `target -> source` already exists in the graph
/// formed by the existing edges plus the candidate. O(V+E) per call.
pub fn would_create_cycle(
    existing: &[Edge],
    source: Option<&BlockId>,
    target: Option<&BlockId>,
) -> bool {
    let (Some(source), Some(target)) = (source, target) else {
        return true;
    };
    if source == target {
        return true;
    }
    let mut pairs: Vec<(&BlockId, &BlockId)> =
        existing.iter().map(|e| (&e.source, &e.target)).collect();
    pairs.push((source, target));
    reachable(&pairs, target, source)
}

fn reachable(pairs: &[(&BlockId, &BlockId)], start: &BlockId, goal: &BlockId) -> bool {
    let mut adjacency: HashMap<&BlockId, Vec<&BlockId>> = HashMap::new();
    for &(from, to) in pairs {
        adjacency.entry(from).or_default().push(to);
    }

    let mut visited: HashSet<&BlockId> = HashSet::new();
    let mut stack = vec![start];
    while let Some(block) = stack.pop() {
        if block == goal {
            return true;
        }
        if !visited.insert(block) {
            continue;
        }
        if let Some(neighbors) = adjacency.get(block) {
            stack.extend(neighbors.iter().copied());
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_core::EdgeId;

    fn edge(id: &str, source: &str, target: &str) -> Edge {
        Edge::new(EdgeId::new(id), source, target)
    }

    #[test]
    fn path_follows_direction() {
        let edges = vec![edge("e1", "a", "b"), edge("e2", "b", "c")];
        assert!(has_path(&edges, &"a".into(), &"c".into()));
        assert!(!has_path(&edges, &"c".into(), &"a".into()));
    }

    #[test]
    fn rejects_missing_endpoints_and_self_loops() {
        let edges: Vec<Edge> = vec![];
        let a = BlockId::new("a");
        assert!(would_create_cycle(&edges, None, Some(&a)));
        assert!(would_create_cycle(&edges, Some(&a), None));
        assert!(would_create_cycle(&edges, Some(&a), Some(&a)));
    }

    #[test]
    fn rejects_closing_edge() {
        let edges = vec![edge("e1", "a", "b"), edge("e2", "b", "c")];
        let a = BlockId::new("a");
        let c = BlockId::new("c");
        assert!(would_create_cycle(&edges, Some(&c), Some(&a)));
        // forward edge over an existing path is a parallel route, not a cycle
        assert!(!would_create_cycle(&edges, Some(&a), Some(&c)));
    }

    #[test]
    fn inputs_are_untouched() {
        let edges = vec![edge("e1", "a", "b")];
        let before = edges.clone();
        let a = BlockId::new("a");
        let b = BlockId::new("b");
        let _ = would_create_cycle(&edges, Some(&b), Some(&a));
        assert_eq!(edges, before);
    }

    #[test]
    fn result_independent_of_edge_order() {
        let forward = vec![edge("e1", "a", "b"), edge("e2", "b", "c"), edge("e3", "c", "d")];
        let mut reversed = forward.clone();
        reversed.reverse();
        let d = BlockId::new("d");
        let a = BlockId::new("a");
        assert_eq!(
            would_create_cycle(&forward, Some(&d), Some(&a)),
            would_create_cycle(&reversed, Some(&d), Some(&a)),
        );
    }
}
