// Start-up environment capabilities. Queried once; every consumer receives
// the resulting `Capabilities` value instead of asking the host again.

/// Host queries backing `Capabilities`. Each answer is independent; a probe
/// that cannot determine a capability must report it as absent.
pub trait CapabilityProbe {
    fn prefers_reduced_motion(&self) -> bool;
    fn has_fine_pointer(&self) -> bool;
    fn has_intersection_observer(&self) -> bool;
    fn has_frame_callbacks(&self) -> bool;

    fn probe(&self) -> Capabilities {
        Capabilities {
            reduced_motion: self.prefers_reduced_motion(),
            fine_pointer: self.has_fine_pointer(),
            intersection_observer: self.has_intersection_observer(),
            frame_callbacks: self.has_frame_callbacks(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub reduced_motion: bool,
    pub fine_pointer: bool,
    pub intersection_observer: bool,
    pub frame_callbacks: bool,
}

impl Capabilities {
    /// The cursor proxy needs a precise pointer and permission to animate.
    #[inline]
    pub fn cursor_enabled(&self) -> bool {
        self.fine_pointer && !self.reduced_motion
    }

    #[inline]
    pub fn ambient_enabled(&self) -> bool {
        !self.reduced_motion
    }
}

impl std::fmt::Display for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "reduced_motion={} fine_pointer={} intersection_observer={} frame_callbacks={}",
            self.reduced_motion, self.fine_pointer, self.intersection_observer, self.frame_callbacks
        )
    }
}
