use crate::core::{FrameCallback, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler. When the primitive is missing
/// (or the request throws) the callback is handed back to the caller.
pub struct RafScheduler {
    window: web::Window,
    available: bool,
}

impl RafScheduler {
    pub fn new(window: web::Window, available: bool) -> Self {
        if !available {
            log::warn!("[frame] requestAnimationFrame unavailable; running updates synchronously");
        }
        Self { window, available }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<(), FrameCallback> {
        if !self.available {
            return Err(callback);
        }
        // Kept in a shared slot so a failed request can return it.
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(Some(callback)));
        let fire = slot.clone();
        let js_cb = Closure::once_into_js(move || {
            let cb = fire.borrow_mut().take();
            if let Some(cb) = cb {
                cb();
            }
        });
        match self.window.request_animation_frame(js_cb.unchecked_ref()) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                let cb = slot.borrow_mut().take();
                cb.map_or(Ok(()), Err)
            }
        }
    }
}
