#![cfg(target_arch = "wasm32")]
use crate::core::{CapabilityProbe, FrameScheduler};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod page;
mod particles;
mod probe;
mod reveal;
mod scroll;
mod settings;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sky-effects starting");

    // Nothing here may break the host page: failures only disable effects.
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let caps = probe::WindowProbe::new(&window).probe();
    log::info!("[probe] {}", caps);
    let cfg = settings::load(&document);

    let scheduler: Rc<dyn FrameScheduler> =
        Rc::new(frame::RafScheduler::new(window.clone(), caps.frame_callbacks));

    page::wire_loader(&window, &document, &cfg.loader, caps.reduced_motion);

    // Scroll-driven layers and visibility-driven reveals run side by side.
    scroll::wire_parallax(&window, &document, &cfg, scheduler.clone());
    reveal::wire_reveals(&document, &cfg, &caps);

    events::wire_cursor(&window, &document, &cfg, &caps, scheduler);
    particles::emit_particles(&document, &cfg, &caps);

    page::wire_anchor_scroll(&document);
    page::wire_platform_hover(&document);
    page::wire_visibility(&document);
    page::wire_nav(&document);
    Ok(())
}
