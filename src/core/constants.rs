// Effect tuning constants shared by the core and the browser bindings.
//
// These are the defaults behind `EffectsConfig`; a page can override any of
// them through its inline JSON config block.

// Parallax
pub const PARALLAX_AMPLITUDE: f32 = 60.0; // px of travel per unit speed per px scrolled
pub const PARALLAX_ATTRIBUTE: &str = "data-parallax";

// Atmosphere easing
pub const ATMOSPHERE_THRESHOLD: f32 = 0.9; // fraction of the viewport height to full effect
pub const ATMOSPHERE_LIFT_PX: f32 = 220.0;
pub const ATMOSPHERE_SCALE_GAIN: f32 = 0.08;
pub const ATMOSPHERE_BASE_OPACITY: f32 = 0.62;
pub const MIN_VIEWPORT_EXTENT: f32 = 1.0;

// Reveal-on-scroll (one-shot)
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

// Animation gating (re-entrant)
pub const GATE_THRESHOLD: f64 = 0.01;
pub const GATE_ROOT_MARGIN: &str = "250px 0px 250px 0px";

// Cursor
pub const CURSOR_SMOOTHING: f32 = 0.18; // α in rendered += (raw - rendered) * α

// Ambient particle pools
pub const WIND_PARTICLE_COUNT: usize = 14;
pub const SPARKLE_COUNT: usize = 24;
pub const MAX_PARTICLES_PER_POOL: usize = 256;

pub const WIND_DELAY_SEC: [f32; 2] = [0.0, 12.0];
pub const WIND_DURATION_SEC: [f32; 2] = [8.0, 16.0];
pub const WIND_OFFSET_PCT: [f32; 2] = [0.0, 100.0];
pub const WIND_SIZE_PX: [f32; 2] = [40.0, 160.0];
pub const WIND_OPACITY: [f32; 2] = [0.15, 0.45];

pub const SPARKLE_DELAY_SEC: [f32; 2] = [0.0, 6.0];
pub const SPARKLE_DURATION_SEC: [f32; 2] = [2.0, 5.0];
pub const SPARKLE_OFFSET_PCT: [f32; 2] = [0.0, 100.0];
pub const SPARKLE_SIZE_PX: [f32; 2] = [2.0, 6.0];
pub const SPARKLE_OPACITY: [f32; 2] = [0.4, 1.0];

// Loader
pub const LOADER_DELAY_READY_MS: i32 = 250; // document already complete at start-up
pub const LOADER_DELAY_ON_LOAD_MS: i32 = 350;
pub const LOADER_REMOVE_AFTER_MS: i32 = 900; // matches the CSS fade-out
