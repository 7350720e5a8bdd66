//! Restart a class-driven CSS animation.
//!
//! Removing and re-adding the same class within one task is coalesced by the
//! browser into no change. A forced layout read between the two makes the
//! re-add a fresh state change, so every call restarts from the first frame.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::util::dom::{DocumentHost, Target};

/// DOM `id` of the decorative box.
pub const ANIMATED_BOX_ID: &str = "animatedBox";
/// Class whose presence plays the pulse keyframes.
pub const PULSE_MARKER: &str = "pulse-animation";

/// Remove `marker`, flush layout, re-add `marker`.
pub fn restart(doc: &impl DocumentHost, target: Target, marker: &str) {
    doc.set_marker(target, marker, false);
    doc.force_layout(target);
    doc.set_marker(target, marker, true);
}

/// Restart the pulse on the animated box.
pub fn pulse(doc: &impl DocumentHost) {
    restart(doc, Target::Element(ANIMATED_BOX_ID), PULSE_MARKER);
}
