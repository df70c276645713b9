use super::capability::Capabilities;
use super::config::{AmbientConfig, ParticleRanges, Span};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Wind,
    Sparkle,
}

impl ParticleKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ParticleKind::Wind => "wind-particle",
            ParticleKind::Sparkle => "sparkle",
        }
    }
}

/// Timing and look of one decorative particle, fixed at generation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub kind: ParticleKind,
    pub delay: f32,
    pub duration: f32,
    pub start_offset: f32,
    pub size: f32,
    pub opacity: f32,
}

impl ParticleSpec {
    pub fn style_properties(&self) -> [(&'static str, String); 5] {
        [
            ("--delay", format!("{:.2}s", self.delay)),
            ("--duration", format!("{:.2}s", self.duration)),
            ("--offset", format!("{:.2}%", self.start_offset)),
            ("--size", format!("{:.1}px", self.size)),
            ("--opacity", format!("{:.3}", self.opacity)),
        ]
    }
}

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, span: Span) -> f32 {
    span.min + (span.max - span.min) * rng.gen::<f32>()
}

fn generate_pool<R: Rng + ?Sized>(
    rng: &mut R,
    kind: ParticleKind,
    count: usize,
    ranges: &ParticleRanges,
    out: &mut Vec<ParticleSpec>,
) {
    out.extend((0..count).map(|_| ParticleSpec {
        kind,
        delay: sample(rng, ranges.delay),
        duration: sample(rng, ranges.duration),
        start_offset: sample(rng, ranges.offset),
        size: sample(rng, ranges.size),
        opacity: sample(rng, ranges.opacity),
    }));
}

/// Wind pool followed by sparkle pool. Pure over `rng`; inserting the
/// particles into the page is the caller's business.
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R, cfg: &AmbientConfig) -> Vec<ParticleSpec> {
    let mut out = Vec::with_capacity(cfg.wind_count + cfg.sparkle_count);
    generate_pool(rng, ParticleKind::Wind, cfg.wind_count, &cfg.wind, &mut out);
    generate_pool(rng, ParticleKind::Sparkle, cfg.sparkle_count, &cfg.sparkle, &mut out);
    out
}

/// Reduced motion suppresses ambient decoration entirely.
pub fn emit<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &AmbientConfig,
    caps: &Capabilities,
) -> Vec<ParticleSpec> {
    if !caps.ambient_enabled() {
        return Vec::new();
    }
    generate_particles(rng, cfg)
}
