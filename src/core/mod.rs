pub mod ambient;
pub mod capability;
pub mod coalescer;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod loader;
pub mod parallax;
pub mod reveal;
pub mod state;

pub use capability::{Capabilities, CapabilityProbe};
pub use coalescer::{FrameCallback, FrameCoalescer, FrameLoop, FrameScheduler, Schedule};
pub use config::EffectsConfig;
pub use state::{CursorState, ScrollState};
