use crate::core::parallax::ParallaxScheduler;
use crate::core::{EffectsConfig, FrameCoalescer, FrameScheduler, ScrollState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ParallaxContext {
    window: web::Window,
    parallax: RefCell<ParallaxScheduler<web::HtmlElement>>,
    atmosphere: Option<web::HtmlElement>,
    coalescer: FrameCoalescer,
}

impl ParallaxContext {
    /// Coalesced work: reads `scrollY` at frame time, then projects.
    fn apply(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0) as f32;
        let mut parallax = self.parallax.borrow_mut();
        let frame = parallax.recompute(scroll_y);
        for (el, offset) in &frame.layers {
            _ = el.style().set_property("transform", &offset.transform());
        }
        if let Some(sky) = &self.atmosphere {
            dom::set_styles(sky, frame.atmosphere.style_properties());
        }
    }
}

fn request_update(ctx: &Rc<ParallaxContext>) {
    let c = ctx.clone();
    ctx.coalescer.schedule(move || c.apply());
}

pub fn wire_parallax(
    window: &web::Window,
    document: &web::Document,
    cfg: &EffectsConfig,
    scheduler: Rc<dyn FrameScheduler>,
) {
    let attr = cfg.selectors.parallax_attribute.as_str();
    let candidates = dom::query_all(document, &format!("[{}]", attr))
        .into_iter()
        .filter_map(|el| {
            let raw = el.get_attribute(attr);
            dom::as_html(el).map(|h| (h, raw))
        });
    let (width, height) = dom::viewport_size(window);
    let parallax = ParallaxScheduler::new(
        cfg.parallax.clone(),
        ScrollState::new(width, height),
        candidates,
    );
    let atmosphere = dom::query_one(document, &cfg.selectors.atmosphere).and_then(dom::as_html);
    log::info!(
        "[parallax] layers={} skipped={} atmosphere={}",
        parallax.targets().len(),
        parallax.rejected().len(),
        atmosphere.is_some()
    );

    let ctx = Rc::new(ParallaxContext {
        window: window.clone(),
        parallax: RefCell::new(parallax),
        atmosphere,
        coalescer: FrameCoalescer::new(scheduler),
    });

    let resize_ctx = ctx.clone();
    dom::add_passive_listener(window, "resize", move |_: web::Event| {
        let (w, h) = dom::viewport_size(&resize_ctx.window);
        resize_ctx.parallax.borrow_mut().resize(w, h);
    });

    // Initial placement before the first scroll.
    request_update(&ctx);

    let scroll_ctx = ctx.clone();
    dom::add_passive_listener(window, "scroll", move |_: web::Event| {
        request_update(&scroll_ctx);
    });
}
