use super::config::{AtmosphereConfig, DriftConfig, ParallaxConfig};
use super::constants::MIN_VIEWPORT_EXTENT;
use super::state::ScrollState;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum TargetError {
    #[error("missing parallax speed")]
    Missing,
    #[error("parallax speed is not a number: {0:?}")]
    NotANumber(String),
    #[error("parallax speed is not finite: {0}")]
    NotFinite(f32),
}

/// Per-layer depth factors. `speed_x` is zero unless the marker names a
/// second axis (`data-parallax="0.4 0.1"`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerParams {
    pub speed_y: f32,
    pub speed_x: f32,
}

impl LayerParams {
    pub fn parse(raw: Option<&str>) -> Result<Self, TargetError> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(TargetError::Missing)?;
        let mut parts = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty());
        let speed_y = match parts.next() {
            Some(p) => parse_speed(p)?,
            None => return Err(TargetError::NotANumber(raw.to_string())),
        };
        let speed_x = match parts.next() {
            Some(p) => parse_speed(p)?,
            None => 0.0,
        };
        if parts.next().is_some() {
            return Err(TargetError::NotANumber(raw.to_string()));
        }
        Ok(Self { speed_y, speed_x })
    }
}

fn parse_speed(s: &str) -> Result<f32, TargetError> {
    let v: f32 = s
        .parse()
        .map_err(|_| TargetError::NotANumber(s.to_string()))?;
    if !v.is_finite() {
        return Err(TargetError::NotFinite(v));
    }
    Ok(v)
}

#[derive(Clone, Debug)]
pub struct EffectTarget<H> {
    pub handle: H,
    pub params: LayerParams,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub fn transform(&self) -> String {
        format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)
    }
}

#[inline]
pub fn smoothstep(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}

/// Normalised scroll progress towards the full atmosphere effect.
#[inline]
pub fn atmosphere_progress(scroll_y: f32, viewport_height: f32, threshold: f32) -> f32 {
    let denom = (viewport_height * threshold).max(MIN_VIEWPORT_EXTENT);
    (scroll_y / denom).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereFrame {
    pub eased: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl AtmosphereFrame {
    pub fn from_eased(eased: f32, cfg: &AtmosphereConfig) -> Self {
        Self {
            eased,
            translate_y: -eased * cfg.lift_px,
            scale: 1.0 + eased * cfg.scale_gain,
            opacity: cfg.base_opacity * (1.0 - eased),
        }
    }

    pub fn at(scroll: &ScrollState, cfg: &AtmosphereConfig) -> Self {
        let p = atmosphere_progress(scroll.scroll_y, scroll.viewport_height, cfg.threshold);
        Self::from_eased(smoothstep(p), cfg)
    }

    /// CSS custom properties consumed by the atmosphere stylesheet.
    pub fn style_properties(&self) -> [(&'static str, String); 3] {
        [
            ("--sky-y", format!("{:.2}px", self.translate_y)),
            ("--sky-s", format!("{:.4}", self.scale)),
            ("--sky-a", format!("{:.4}", self.opacity)),
        ]
    }
}

pub fn layer_offset(
    params: &LayerParams,
    index: usize,
    scroll_y: f32,
    amplitude: f32,
    drift: Option<&DriftConfig>,
) -> Translation {
    let mut x = scroll_y * params.speed_x * amplitude;
    if let Some(d) = drift {
        x += d.amplitude * (scroll_y * d.frequency + index as f32 * d.phase_step).sin();
    }
    Translation {
        x,
        y: scroll_y * params.speed_y * amplitude,
    }
}

pub struct ParallaxFrame<'a, H> {
    pub scroll_y: f32,
    pub layers: SmallVec<[(&'a H, Translation); 8]>,
    pub atmosphere: AtmosphereFrame,
}

/// Scroll-driven layer offsets and atmosphere easing. The target set is
/// fixed at construction.
pub struct ParallaxScheduler<H> {
    config: ParallaxConfig,
    scroll: ScrollState,
    targets: Vec<EffectTarget<H>>,
    rejected: Vec<(usize, TargetError)>,
}

impl<H> ParallaxScheduler<H> {
    /// Builds from discovered `(handle, raw speed marker)` pairs. Targets
    /// with a malformed marker are skipped and recorded in `rejected`.
    pub fn new<S: AsRef<str>>(
        config: ParallaxConfig,
        scroll: ScrollState,
        candidates: impl IntoIterator<Item = (H, Option<S>)>,
    ) -> Self {
        let mut targets = Vec::new();
        let mut rejected = Vec::new();
        for (i, (handle, raw)) in candidates.into_iter().enumerate() {
            match LayerParams::parse(raw.as_ref().map(|s| s.as_ref())) {
                Ok(params) => {
                    let index = targets.len();
                    targets.push(EffectTarget {
                        handle,
                        params,
                        index,
                    });
                }
                Err(e) => {
                    log::warn!("[parallax] skipping target #{}: {}", i, e);
                    rejected.push((i, e));
                }
            }
        }
        Self {
            config,
            scroll,
            targets,
            rejected,
        }
    }

    pub fn targets(&self) -> &[EffectTarget<H>] {
        &self.targets
    }

    pub fn rejected(&self) -> &[(usize, TargetError)] {
        &self.rejected
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.scroll.viewport_width = viewport_width;
        self.scroll.viewport_height = viewport_height;
    }

    /// One coalesced recomputation against the scroll position read now.
    pub fn recompute(&mut self, scroll_y: f32) -> ParallaxFrame<'_, H> {
        self.scroll.scroll_y = scroll_y;
        let amplitude = self.config.amplitude;
        let drift = self.config.drift.as_ref();
        let layers = self
            .targets
            .iter()
            .map(|t| {
                (
                    &t.handle,
                    layer_offset(&t.params, t.index, scroll_y, amplitude, drift),
                )
            })
            .collect();
        ParallaxFrame {
            scroll_y,
            layers,
            atmosphere: AtmosphereFrame::at(&self.scroll, &self.config.atmosphere),
        }
    }
}
