//! End-to-end editing scenarios: net lifecycle, edge assignment, undo/redo.

use ol_core::{EdgeId, NetId, Phase};
use ol_diagram::model::NetKind;
use ol_editor::{DiagramSession, NetPatch};

#[test]
fn added_nets_get_fresh_defaults() {
    let mut session = DiagramSession::new();
    let id = session.add_net();

    let net = session.nets().iter().find(|n| n.id == id).unwrap();
    assert_eq!(net.kind, NetKind::Ac);
    assert_eq!(net.voltage, 100.0);
    assert_eq!(net.phase, Phase::Single);
    assert_eq!(net.label, id.as_str());
    assert_eq!(net.tolerance, None);
}

#[test]
fn net_ids_skip_survivors_after_deletion() {
    let mut session = DiagramSession::new();
    let n2 = session.add_net();
    let n3 = session.add_net();
    assert_eq!(n2.as_str(), "net-2");
    assert_eq!(n3.as_str(), "net-3");

    // deleting net-2 leaves net-3 in place; the next id must not collide
    assert!(session.remove_net(&n2));
    let next = session.add_net();
    assert_eq!(next.as_str(), "net-4");
}

#[test]
fn label_and_attribute_updates_hit_only_the_target() {
    let mut session = DiagramSession::new();
    let id = session.add_net();

    assert!(session.update_net_label(&id, "Control bus"));
    assert!(session.update_net_attributes(
        &id,
        &NetPatch {
            kind: Some(NetKind::Dc),
            voltage: Some(48.0),
            tolerance: Some(Some(5.0)),
            ..NetPatch::default()
        },
    ));

    let net = session.nets().iter().find(|n| n.id == id).unwrap();
    assert_eq!(net.label, "Control bus");
    assert_eq!(net.kind, NetKind::Dc);
    assert_eq!(net.voltage, 48.0);
    assert_eq!(net.phase, Phase::Single); // untouched by the patch
    assert_eq!(net.tolerance, Some(5.0));

    let untouched = &session.nets()[0];
    assert_eq!(untouched.label, "AC200V");

    assert!(!session.update_net_label(&NetId::new("net-missing"), "x"));
}

#[test]
fn remove_net_is_refused_while_referenced() {
    let mut session = DiagramSession::with_starter_diagram();
    let id = session.add_net();
    assert!(session.update_edge_net(&EdgeId::new("e1-2"), Some(id.clone())));

    assert!(!session.remove_net(&id));
    assert!(session.nets().iter().any(|n| n.id == id));

    assert!(session.update_edge_net(&EdgeId::new("e1-2"), None));
    assert!(session.remove_net(&id));
    assert!(!session.nets().iter().any(|n| n.id == id));
}

#[test]
fn undo_restores_nets_and_assignments_exactly() {
    let mut session = DiagramSession::with_starter_diagram();
    let nets_before = session.nets().to_vec();
    let edges_before = session.edges().to_vec();

    let id = session.add_net();
    session.update_edge_net(&EdgeId::new("e2-3"), Some(id.clone()));
    assert!(session.can_undo_net());

    // two recorded operations, two undos back to the seed
    assert!(session.undo_net());
    assert!(session.undo_net());
    assert_eq!(session.nets(), nets_before.as_slice());
    assert_eq!(session.edges(), edges_before.as_slice());
    assert!(!session.undo_net());

    // redo walks forward again
    assert!(session.redo_net());
    assert!(session.redo_net());
    assert!(session.nets().iter().any(|n| n.id == id));
    let edge = session.edges().iter().find(|e| e.id.as_str() == "e2-3").unwrap();
    assert_eq!(edge.net.as_ref(), Some(&id));
    assert!(!session.redo_net());
}

#[test]
fn new_mutation_discards_redo() {
    let mut session = DiagramSession::new();
    session.add_net();
    session.undo_net();
    assert!(session.can_redo_net());

    session.add_net();
    assert!(!session.can_redo_net());
}

#[test]
fn node_edits_do_not_enter_net_history() {
    let mut session = DiagramSession::new();
    session.add_node("Spare breaker", None);
    assert!(!session.can_undo_net());
    assert!(!session.undo_net());
}
