// Host-side tests for one-shot reveals, re-entrant gating and the
// no-IntersectionObserver fallback.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod capability {
        include!("../src/core/capability.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use fx::capability::{CapabilityProbe, Capabilities};
use fx::reveal::*;

struct NoObserverProbe;

impl CapabilityProbe for NoObserverProbe {
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
    fn has_fine_pointer(&self) -> bool {
        true
    }
    fn has_intersection_observer(&self) -> bool {
        false
    }
    fn has_frame_callbacks(&self) -> bool {
        true
    }
}

#[test]
fn reveal_fires_once_and_never_reverses() {
    let mut set = RevealSet::new(1);
    let mut reveals = 0;
    for hit in [true, false, true, false, true] {
        if set.on_intersection(0, hit) == Transition::Reveal {
            reveals += 1;
        }
    }
    assert_eq!(reveals, 1);
    assert_eq!(set.state(0), Some(RevealState::Revealed));
    assert!(!set.is_observed(0));
}

#[test]
fn initial_non_intersecting_notification_keeps_target_pending() {
    let mut set = RevealSet::new(2);
    assert_eq!(set.on_intersection(1, false), Transition::None);
    assert_eq!(set.state(1), Some(RevealState::Pending));
    assert!(set.is_observed(1));
    assert_eq!(set.on_intersection(1, true), Transition::Reveal);
    assert_eq!(set.state(0), Some(RevealState::Pending));
    assert_eq!(set.revealed_count(), 1);
}

#[test]
fn notifications_after_reveal_are_ignored() {
    let mut set = RevealSet::new(1);
    assert_eq!(set.on_intersection(0, true), Transition::Reveal);
    // Entries for the same target can still arrive later in the batch.
    assert_eq!(set.on_intersection(0, true), Transition::None);
    assert_eq!(set.on_intersection(0, true), Transition::None);
    assert_eq!(set.revealed_count(), 1);
    assert_eq!(set.on_intersection(7, true), Transition::None);
}

#[test]
fn gate_toggles_in_both_directions() {
    let mut gates = GateSet::new(1);
    let seq: Vec<Transition> = [true, true, false, false, true, false]
        .into_iter()
        .map(|hit| gates.on_intersection(0, hit))
        .collect();
    assert_eq!(
        seq,
        vec![
            Transition::Activate,
            Transition::None,
            Transition::Deactivate,
            Transition::None,
            Transition::Activate,
            Transition::Deactivate,
        ]
    );
    assert_eq!(gates.state(0), Some(GateState::Inactive));
}

#[test]
fn unknown_target_index_is_ignored() {
    let mut set = RevealSet::new(1);
    let mut gates = GateSet::new(1);
    assert_eq!(set.on_intersection(5, true), Transition::None);
    assert_eq!(gates.on_intersection(5, true), Transition::None);
    assert_eq!(set.state(5), None);
}

#[test]
fn fallback_activates_everything_without_events() {
    let caps = NoObserverProbe.probe();
    let observer = RevealObserver::new(3, 2, caps.intersection_observer);

    assert_eq!(observer.mode(), ObserveMode::Fallback);
    assert_eq!(observer.reveals.revealed_count(), 3);
    assert_eq!(observer.gates.active_count(), 2);
    assert!((0..3).all(|i| observer.reveals.state(i) == Some(RevealState::Revealed)));
}

#[test]
fn observing_mode_starts_pending_and_inactive() {
    let caps = Capabilities {
        intersection_observer: true,
        ..Capabilities::default()
    };
    let observer = RevealObserver::new(2, 2, caps.intersection_observer);
    assert_eq!(observer.mode(), ObserveMode::Observing);
    assert_eq!(observer.reveals.revealed_count(), 0);
    assert_eq!(observer.gates.active_count(), 0);
}

#[test]
fn empty_sets_are_fine() {
    let observer = RevealObserver::new(0, 0, false);
    assert!(observer.reveals.is_empty());
    assert!(observer.gates.is_empty());
}
