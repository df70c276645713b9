// Process-wide input state records.
//
// Each field has exactly one writer: scroll position is written by the
// coalesced parallax recomputation, viewport extent by the resize listener,
// raw pointer position by pointer-move, rendered position by the cursor's
// per-frame step. Nothing else mutates them.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f32,
    pub viewport_height: f32,
    pub viewport_width: f32,
}

impl ScrollState {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height,
            viewport_width,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub raw: Vec2,
    pub rendered: Vec2,
    pub is_down: bool,
    pub is_hovering: bool,
}

impl CursorState {
    /// Both positions start at `origin` so the proxy does not sweep in from a corner.
    pub fn at(origin: Vec2) -> Self {
        Self {
            raw: origin,
            rendered: origin,
            is_down: false,
            is_hovering: false,
        }
    }

    #[inline]
    pub fn lag(&self) -> f32 {
        self.raw.distance(self.rendered)
    }
}
