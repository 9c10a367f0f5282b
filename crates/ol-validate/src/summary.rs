//! Whole-diagram validation: gather blocks per net, run the net checks, and
//! derive the aggregate counters a status line renders.

use std::collections::{HashMap, HashSet};

use ol_core::{BlockId, NetId};
use ol_diagram::model::{Edge, Net, Node, default_net};

use crate::finding::{Finding, Level};
use crate::rules::{RatedBlock, check_net};

/// Aggregate counters over one validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationStats {
    pub errors: usize,
    pub warnings: usize,
    pub uncertain_loads: usize,
    pub nets: usize,
    pub unassigned_edges: usize,
    pub orphan_nets: usize,
}

/// Findings plus counters for one validation run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagramReport {
    pub findings: Vec<Finding>,
    pub stats: ValidationStats,
}

/// Validate the whole diagram.
///
/// Pure function of its arguments: the collections are read, never retained or
/// mutated, and running twice on unchanged inputs yields an identical finding
/// list. Blocks reach a net through the edges that carry its id; blocks on no
/// net are checked against the first declared net (or the built-in default
/// when the net list is empty).
pub fn validate_diagram(nodes: &[Node], edges: &[Edge], nets: &[Net]) -> DiagramReport {
    let mut findings: Vec<Finding> = Vec::new();

    let unassigned_edges = edges.iter().filter(|e| e.net.is_none()).count();
    let net_map: HashMap<&NetId, &Net> = nets.iter().map(|n| (&n.id, n)).collect();
    let fallback = default_net();
    let fallback_id = nets.first().map(|n| &n.id).unwrap_or(&fallback.id);

    // which nets each endpoint touches, which net ids are referenced at all,
    // and which references point nowhere (first-seen order kept throughout so
    // repeated runs emit findings in the same order)
    let mut node_nets: HashMap<&BlockId, Vec<&NetId>> = HashMap::new();
    let mut referenced: HashSet<&NetId> = HashSet::new();
    let mut invalid_refs: Vec<&NetId> = Vec::new();
    for edge in edges {
        let Some(net_id) = edge.net.as_ref() else {
            continue;
        };
        if !net_map.contains_key(net_id) && !invalid_refs.contains(&net_id) {
            invalid_refs.push(net_id);
        }
        for endpoint in [&edge.source, &edge.target] {
            let list = node_nets.entry(endpoint).or_default();
            if !list.contains(&net_id) {
                list.push(net_id);
            }
        }
        referenced.insert(net_id);
    }

    // group typed blocks per net, in first-seen order
    let mut groups: Vec<(&NetId, Vec<RatedBlock<'_>>)> = Vec::new();
    for node in nodes {
        let Some(rating) = node.rating.as_ref() else {
            findings.push(Finding::warn(
                "Missing type or rating",
                Some(node.id.as_str()),
            ));
            continue;
        };
        let block = RatedBlock {
            id: &node.id,
            rating,
        };
        let target_nets: Vec<&NetId> = match node_nets.get(&node.id) {
            Some(list) if !list.is_empty() => list.clone(),
            _ => vec![fallback_id],
        };
        for net_id in target_nets {
            match groups.iter_mut().find(|(id, _)| *id == net_id) {
                Some((_, blocks)) => blocks.push(block),
                None => groups.push((net_id, vec![block])),
            }
        }
    }

    for net_id in &invalid_refs {
        findings.push(Finding::warn(
            format!("Edge references missing net: {net_id}"),
            None,
        ));
    }

    let mut uncertain_loads = 0;
    for (net_id, blocks) in &groups {
        // an edge may reference a deleted/unknown net; those blocks are still
        // checked, against the default net
        let net = net_map.get(net_id).copied().unwrap_or(&fallback);
        let result = check_net(blocks, net);
        findings.extend(result.findings);
        uncertain_loads += result.uncertain_loads;
    }

    let errors = findings.iter().filter(|f| f.level == Level::Error).count();
    let warnings = findings.iter().filter(|f| f.level == Level::Warn).count();
    let orphan_nets = nets.iter().filter(|n| !referenced.contains(&n.id)).count();

    DiagramReport {
        stats: ValidationStats {
            errors,
            warnings,
            uncertain_loads,
            nets: nets.len().max(1),
            unassigned_edges,
            orphan_nets,
        },
        findings,
    }
}
