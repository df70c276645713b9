use super::config::LoaderConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentPhase {
    /// `readyState == "complete"` when the effects start.
    Complete,
    /// Still loading; the loader hides on the `load` event.
    Loading,
}

/// Delay in ms before the loader overlay starts fading out.
pub fn hide_delay_ms(phase: DocumentPhase, reduced_motion: bool, cfg: &LoaderConfig) -> i32 {
    match phase {
        DocumentPhase::Complete => cfg.ready_delay_ms,
        DocumentPhase::Loading if reduced_motion => 0,
        DocumentPhase::Loading => cfg.on_load_delay_ms,
    }
}
