use crate::core::CapabilityProbe;
use wasm_bindgen::JsValue;
use web_sys as web;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const FINE_POINTER_QUERY: &str = "(pointer: fine)";

/// Answers capability queries from the live `window`. Anything the host
/// cannot answer counts as unsupported.
pub struct WindowProbe<'a> {
    window: &'a web::Window,
}

impl<'a> WindowProbe<'a> {
    pub fn new(window: &'a web::Window) -> Self {
        Self { window }
    }

    fn media_matches(&self, query: &str) -> bool {
        matches!(self.window.match_media(query), Ok(Some(mql)) if mql.matches())
    }

    fn has_global(&self, name: &str) -> bool {
        js_sys::Reflect::has(self.window, &JsValue::from_str(name)).unwrap_or(false)
    }
}

impl CapabilityProbe for WindowProbe<'_> {
    fn prefers_reduced_motion(&self) -> bool {
        self.media_matches(REDUCED_MOTION_QUERY)
    }

    fn has_fine_pointer(&self) -> bool {
        self.media_matches(FINE_POINTER_QUERY)
    }

    fn has_intersection_observer(&self) -> bool {
        self.has_global("IntersectionObserver")
    }

    fn has_frame_callbacks(&self) -> bool {
        self.has_global("requestAnimationFrame")
    }
}
