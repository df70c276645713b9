use super::capability::Capabilities;
use super::state::CursorState;
use glam::Vec2;

/// Tree view used for hover hit-testing. Implementations decide what a
/// node is; the walk itself never touches the host document directly.
pub trait InteractiveTree {
    type Node;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn is_interactive(&self, node: &Self::Node) -> bool;

    /// `true` if `node` or any ancestor up to the root is interactive.
    fn within_interactive(&self, node: &Self::Node) -> bool {
        if self.is_interactive(node) {
            return true;
        }
        let mut cur = self.parent(node);
        while let Some(n) = cur {
            if self.is_interactive(&n) {
                return true;
            }
            cur = self.parent(&n);
        }
        false
    }
}

/// Tag/class predicate for interactive elements (`a`, `button`, `.platform`).
#[derive(Clone, Debug, Default)]
pub struct InteractiveMatcher {
    tags: Vec<String>,
    classes: Vec<String>,
}

impl InteractiveMatcher {
    pub fn new(tags: &[String], classes: &[String]) -> Self {
        Self {
            tags: tags.iter().map(|t| t.to_ascii_lowercase()).collect(),
            classes: classes.to_vec(),
        }
    }

    /// Tag match, or `has_class` answers yes for one of the configured
    /// classes. The element's own class list is never walked.
    pub fn matches_with(&self, tag: &str, mut has_class: impl FnMut(&str) -> bool) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
            || self.classes.iter().any(|c| has_class(c.as_str()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    /// Proxy element removed; terminal for the page lifetime.
    Disabled,
    Running,
}

impl CursorMode {
    pub fn for_capabilities(caps: &Capabilities) -> Self {
        if caps.cursor_enabled() {
            CursorMode::Running
        } else {
            CursorMode::Disabled
        }
    }
}

/// One discrete low-pass step towards `raw`. For `alpha` in (0, 1) the
/// distance shrinks by a factor `1 - alpha` and never overshoots.
#[inline]
pub fn smooth_step_towards(rendered: Vec2, raw: Vec2, alpha: f32) -> Vec2 {
    rendered + (raw - rendered) * alpha
}

/// Smoothed pointer proxy. Pointer events write the raw fields and flags;
/// only `step` writes the rendered position.
#[derive(Clone, Debug)]
pub struct CursorProxy {
    state: CursorState,
    smoothing: f32,
}

impl CursorProxy {
    pub fn new(origin: Vec2, smoothing: f32) -> Self {
        Self {
            state: CursorState::at(origin),
            smoothing,
        }
    }

    pub fn state(&self) -> &CursorState {
        &self.state
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.state.raw = Vec2::new(x, y);
    }

    pub fn pointer_down(&mut self) {
        self.state.is_down = true;
    }

    pub fn pointer_up(&mut self) {
        self.state.is_down = false;
    }

    /// Pointer entered `target`. Returns `Some(true)` when hover turns on.
    pub fn pointer_over<T: InteractiveTree>(&mut self, tree: &T, target: &T::Node) -> Option<bool> {
        if self.state.is_hovering || !tree.within_interactive(target) {
            return None;
        }
        self.state.is_hovering = true;
        Some(true)
    }

    /// Pointer left `from` for `to` (if any). Hover only clears when the
    /// pointer leaves interactive territory altogether; crossing between
    /// nested interactive nodes keeps it on. Returns `Some(false)` when
    /// hover turns off.
    pub fn pointer_out<T: InteractiveTree>(
        &mut self,
        tree: &T,
        from: &T::Node,
        to: Option<&T::Node>,
    ) -> Option<bool> {
        if !tree.within_interactive(from) {
            return None;
        }
        if to.is_some_and(|n| tree.within_interactive(n)) {
            return None;
        }
        if !self.state.is_hovering {
            return None;
        }
        self.state.is_hovering = false;
        Some(false)
    }

    /// Per-frame interpolation; returns the new rendered position.
    pub fn step(&mut self) -> Vec2 {
        self.state.rendered =
            smooth_step_towards(self.state.rendered, self.state.raw, self.smoothing);
        self.state.rendered
    }
}

/// Inline style for the proxy element at `pos`.
pub fn position_style(pos: Vec2) -> [(&'static str, String); 2] {
    [
        ("left", format!("{:.2}px", pos.x)),
        ("top", format!("{:.2}px", pos.y)),
    ]
}
