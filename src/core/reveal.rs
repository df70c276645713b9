// Viewport-intersection state for entrance reveals (one-shot) and for
// gating heavy animation blocks (re-entrant). Targets are identified by
// their discovery index; the bindings own the element handles.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Inactive,
    Active,
}

/// What the bindings must do in response to an intersection notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Mark the target revealed and stop observing it.
    Reveal,
    Activate,
    Deactivate,
    None,
}

/// One-shot set: Pending -> Revealed on first intersection, never back.
#[derive(Clone, Debug)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![RevealState::Pending; len],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// `true` while the target is still pending. Later notifications for a
    /// revealed target get `Transition::None` from `on_intersection`.
    pub fn is_observed(&self, index: usize) -> bool {
        self.state(index) == Some(RevealState::Pending)
    }

    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Transition {
        match self.states.get_mut(index) {
            Some(state) if is_intersecting && *state == RevealState::Pending => {
                *state = RevealState::Revealed;
                Transition::Reveal
            }
            _ => Transition::None,
        }
    }

    /// Fallback when intersection observation is unavailable.
    pub fn reveal_all(&mut self) {
        self.states.fill(RevealState::Revealed);
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }
}

/// Re-entrant set: follows visibility in both directions for its lifetime.
#[derive(Clone, Debug)]
pub struct GateSet {
    states: Vec<GateState>,
}

impl GateSet {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![GateState::Inactive; len],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<GateState> {
        self.states.get(index).copied()
    }

    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Transition {
        let Some(state) = self.states.get_mut(index) else {
            return Transition::None;
        };
        let next = if is_intersecting {
            GateState::Active
        } else {
            GateState::Inactive
        };
        if *state == next {
            return Transition::None;
        }
        *state = next;
        match next {
            GateState::Active => Transition::Activate,
            GateState::Inactive => Transition::Deactivate,
        }
    }

    pub fn activate_all(&mut self) {
        self.states.fill(GateState::Active);
    }

    pub fn active_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == GateState::Active)
            .count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserveMode {
    Observing,
    /// No intersection capability: everything starts in its terminal state.
    Fallback,
}

/// Both target sets plus the mode chosen at start-up.
#[derive(Clone, Debug)]
pub struct RevealObserver {
    pub reveals: RevealSet,
    pub gates: GateSet,
    mode: ObserveMode,
}

impl RevealObserver {
    pub fn new(reveal_count: usize, gate_count: usize, intersection_observer: bool) -> Self {
        let mut reveals = RevealSet::new(reveal_count);
        let mut gates = GateSet::new(gate_count);
        let mode = if intersection_observer {
            ObserveMode::Observing
        } else {
            reveals.reveal_all();
            gates.activate_all();
            ObserveMode::Fallback
        };
        Self {
            reveals,
            gates,
            mode,
        }
    }

    pub fn mode(&self) -> ObserveMode {
        self.mode
    }
}
