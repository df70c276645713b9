use super::constants::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("{field} range is inverted: [{min}, {max}]")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

/// Complete effect configuration. Every field falls back to the matching
/// constant, so a page only needs to spell out what it changes.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectsConfig {
    pub parallax: ParallaxConfig,
    pub reveal: RevealConfig,
    pub gate: GateConfig,
    pub cursor: CursorConfig,
    pub ambient: AmbientConfig,
    pub loader: LoaderConfig,
    pub selectors: Selectors,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxConfig {
    pub amplitude: f32,
    pub drift: Option<DriftConfig>,
    pub atmosphere: AtmosphereConfig,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            amplitude: PARALLAX_AMPLITUDE,
            drift: None,
            atmosphere: AtmosphereConfig::default(),
        }
    }
}

/// Secondary horizontal sway: `amplitude * sin(scrollY * frequency + index * phase_step)`.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriftConfig {
    pub amplitude: f32,
    pub frequency: f32,
    #[serde(default)]
    pub phase_step: f32,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtmosphereConfig {
    pub threshold: f32,
    pub lift_px: f32,
    pub scale_gain: f32,
    pub base_opacity: f32,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            threshold: ATMOSPHERE_THRESHOLD,
            lift_px: ATMOSPHERE_LIFT_PX,
            scale_gain: ATMOSPHERE_SCALE_GAIN,
            base_opacity: ATMOSPHERE_BASE_OPACITY,
        }
    }
}

/// Intersection-observer tuning for the one-shot reveal set.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

/// Intersection-observer tuning for the re-entrant animation gate. Margins
/// are wider so heavy blocks warm up before they scroll into view.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: GATE_THRESHOLD,
            root_margin: GATE_ROOT_MARGIN.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorConfig {
    pub smoothing: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            smoothing: CURSOR_SMOOTHING,
        }
    }
}

/// Inclusive uniform range `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "[f32; 2]")]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl From<[f32; 2]> for Span {
    fn from([min, max]: [f32; 2]) -> Self {
        Self { min, max }
    }
}

impl Span {
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParticleRanges {
    pub delay: Span,
    pub duration: Span,
    pub offset: Span,
    pub size: Span,
    pub opacity: Span,
}

impl ParticleRanges {
    pub fn wind() -> Self {
        Self {
            delay: WIND_DELAY_SEC.into(),
            duration: WIND_DURATION_SEC.into(),
            offset: WIND_OFFSET_PCT.into(),
            size: WIND_SIZE_PX.into(),
            opacity: WIND_OPACITY.into(),
        }
    }

    pub fn sparkle() -> Self {
        Self {
            delay: SPARKLE_DELAY_SEC.into(),
            duration: SPARKLE_DURATION_SEC.into(),
            offset: SPARKLE_OFFSET_PCT.into(),
            size: SPARKLE_SIZE_PX.into(),
            opacity: SPARKLE_OPACITY.into(),
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        self.delay.check("ambient.delay")?;
        self.duration.check("ambient.duration")?;
        self.offset.check("ambient.offset")?;
        self.size.check("ambient.size")?;
        self.opacity.check("ambient.opacity")?;
        if self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "ambient.opacity",
                value: self.opacity.max as f64,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmbientConfig {
    pub wind_count: usize,
    pub sparkle_count: usize,
    pub wind: ParticleRanges,
    pub sparkle: ParticleRanges,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            wind_count: WIND_PARTICLE_COUNT,
            sparkle_count: SPARKLE_COUNT,
            wind: ParticleRanges::wind(),
            sparkle: ParticleRanges::sparkle(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub ready_delay_ms: i32,
    pub on_load_delay_ms: i32,
    pub remove_after_ms: i32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            ready_delay_ms: LOADER_DELAY_READY_MS,
            on_load_delay_ms: LOADER_DELAY_ON_LOAD_MS,
            remove_after_ms: LOADER_REMOVE_AFTER_MS,
        }
    }
}

/// Declarative markers the bindings use to discover targets at start-up.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub parallax_attribute: String,
    pub atmosphere: String,
    pub reveal: String,
    pub gated: String,
    pub cursor: String,
    pub ambient_container: String,
    pub interactive_tags: Vec<String>,
    pub interactive_classes: Vec<String>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            parallax_attribute: PARALLAX_ATTRIBUTE.to_string(),
            atmosphere: ".hero-sky".to_string(),
            reveal: "[data-reveal]".to_string(),
            gated: ".card, .panel, .video-wrapper, .contact-panel".to_string(),
            cursor: ".angel-cursor".to_string(),
            ambient_container: "[data-ambient]".to_string(),
            interactive_tags: vec!["a".to_string(), "button".to_string()],
            interactive_classes: vec!["platform".to_string()],
        }
    }
}

impl EffectsConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let cfg: EffectsConfig = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = self.cursor.smoothing;
        if !(s > 0.0 && s < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "cursor.smoothing",
                value: s as f64,
            });
        }
        if !self.parallax.amplitude.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "parallax.amplitude",
                value: self.parallax.amplitude as f64,
            });
        }
        let atm = &self.parallax.atmosphere;
        if !(atm.threshold > 0.0 && atm.threshold.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "parallax.atmosphere.threshold",
                value: atm.threshold as f64,
            });
        }
        for (field, t) in [
            ("reveal.threshold", self.reveal.threshold),
            ("gate.threshold", self.gate.threshold),
        ] {
            if !(0.0..=1.0).contains(&t) {
                return Err(ConfigError::OutOfRange { field, value: t });
            }
        }
        for (field, n) in [
            ("ambient.wind_count", self.ambient.wind_count),
            ("ambient.sparkle_count", self.ambient.sparkle_count),
        ] {
            if n > MAX_PARTICLES_PER_POOL {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: n as f64,
                });
            }
        }
        self.ambient.wind.check()?;
        self.ambient.sparkle.check()?;
        Ok(())
    }
}
