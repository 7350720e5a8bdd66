use super::*;
use crate::util::dom::test_helpers::{DomOp, HeadlessDocument};

fn pulse_ops() -> Vec<DomOp> {
    let target = Target::Element(ANIMATED_BOX_ID);
    vec![
        DomOp::RemoveMarker(target, PULSE_MARKER.to_owned()),
        DomOp::Layout(target),
        DomOp::AddMarker(target, PULSE_MARKER.to_owned()),
    ]
}

#[test]
fn pulse_removes_flushes_then_adds() {
    let doc = HeadlessDocument::new();
    pulse(&doc);
    assert_eq!(doc.journal(), pulse_ops());
    assert!(doc.has_marker(Target::Element(ANIMATED_BOX_ID), PULSE_MARKER));
}

#[test]
fn rapid_second_pulse_restarts_again() {
    let doc = HeadlessDocument::new();
    pulse(&doc);
    pulse(&doc);

    let mut expected = pulse_ops();
    expected.extend(pulse_ops());
    assert_eq!(doc.journal(), expected);
    assert!(doc.has_marker(Target::Element(ANIMATED_BOX_ID), PULSE_MARKER));
}

#[test]
fn restart_works_on_any_target() {
    let doc = HeadlessDocument::new();
    restart(&doc, Target::Body, "flash");
    assert!(doc.has_marker(Target::Body, "flash"));
    assert_eq!(doc.journal().len(), 3);
}
